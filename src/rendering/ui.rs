//! # User Interface Elements
//!
//! Text elements written through `show_message`, such as the disc counters
//! and each side's last action.

use std::collections::BTreeMap;

/// Named text elements beside the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessagePanel {
    elements: BTreeMap<String, String>,
}

impl MessagePanel {
    /// Creates a panel with no elements.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the text of element `id`, creating it if needed.
    pub fn set(&mut self, id: &str, text: &str) {
        self.elements.insert(id.to_string(), text.to_string());
    }

    /// Current text of element `id`.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(String::as_str)
    }

    /// All elements, ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.elements
            .iter()
            .map(|(id, text)| (id.as_str(), text.as_str()))
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether no element has been written.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites() {
        let mut panel = MessagePanel::new();
        panel.set("black", "2");
        panel.set("black", "4");
        panel.set("you", "Move d3");

        assert_eq!(panel.get("black"), Some("4"));
        assert_eq!(panel.get("white"), None);
        assert_eq!(panel.len(), 2);
        assert_eq!(
            panel.iter().collect::<Vec<_>>(),
            vec![("black", "4"), ("you", "Move d3")]
        );
    }
}
