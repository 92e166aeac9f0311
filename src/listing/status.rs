/// Whether a status phrase describes a live container.
///
/// `Exited (n) ...` and a bare `Created` are stopped; anything else, including
/// `Restarting` and `Paused`, counts as running.
pub fn is_running(status_text: &str) -> bool {
    let status = status_text.trim().to_lowercase();
    !(status.contains("exited (") || status == "created")
}

#[cfg(test)]
mod tests {
    use super::is_running;

    #[test]
    fn exited_containers_are_not_running() {
        assert!(!is_running("Exited (1) 22 minutes ago"));
        assert!(!is_running("Exited (0) 3 days ago"));
    }

    #[test]
    fn up_containers_are_running() {
        assert!(is_running("Up 12 minutes"));
        assert!(is_running("Up About an hour (healthy)"));
    }

    #[test]
    fn created_only_matches_the_whole_phrase() {
        assert!(!is_running("Created"));
        assert!(!is_running("  created "));
        assert!(is_running("Created something"));
    }

    #[test]
    fn restarting_counts_as_running() {
        assert!(is_running("Restarting (1) 36 seconds ago"));
    }
}
