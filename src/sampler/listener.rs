/// Receives picker events synchronously, on the thread handling the interaction.
/// Implement the methods you care about; default impls are no-ops.
#[allow(unused_variables)]
pub trait ColorListener {
    /// Called once per commit with the new canonical `#RRGGBB` value.
    fn on_color_change(&mut self, hex: &str) {}

    /// Called when a pointer-down on the canvas starts a selection.
    fn on_drag_start(&mut self) {}

    /// Called when the selection ends (pointer-up or pointer-leave).
    fn on_drag_end(&mut self) {}
}

/// Records every committed color in order.
impl ColorListener for Vec<String> {
    fn on_color_change(&mut self, hex: &str) {
        self.push(hex.to_string());
    }
}

/// Keeps only the most recent commit until it is taken.
#[derive(Debug, Default)]
pub struct LatestCommit {
    pending: Option<String>,
}

impl LatestCommit {
    pub fn take(&mut self) -> Option<String> {
        self.pending.take()
    }
}

impl ColorListener for LatestCommit {
    fn on_color_change(&mut self, hex: &str) {
        self.pending = Some(hex.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_records_in_order() {
        let mut seen: Vec<String> = Vec::new();
        seen.on_color_change("#FF0000");
        seen.on_drag_end();
        seen.on_color_change("#00FF00");
        assert_eq!(seen, vec!["#FF0000", "#00FF00"]);
    }

    #[test]
    fn latest_commit_is_taken_once() {
        let mut latest = LatestCommit::default();
        latest.on_color_change("#FF0000");
        latest.on_color_change("#0000FF");
        assert_eq!(latest.take(), Some("#0000FF".to_string()));
        assert_eq!(latest.take(), None);
    }
}
