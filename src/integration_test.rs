#[cfg(test)]
mod test {
    use crate::menu::Session;
    use crate::queue::PieceQueue;

    fn play(seed: u64, input: &str) -> (String, Vec<u32>) {
        let queue = PieceQueue::from_seed(Some(seed));
        let mut session = Session::new(queue, input.as_bytes(), Vec::new());
        session.run().unwrap();

        let remaining = session
            .get_queue()
            .inspect()
            .map(|piece| piece.get_id())
            .collect();
        let text = String::from_utf8(session.into_output()).unwrap();

        (text, remaining)
    }

    #[test]
    fn session_plays_and_refills() {
        let (text, remaining) = play(21, "2\n3\n3\n2\n2\n2\n2\n2\n2\n1\n0\n");

        for id in 1..=6 {
            assert!(text.contains(&format!("(ID: {})\n", id)));
        }
        assert!(text.contains("Queue is full! Play a piece first.\n"));
        assert!(text.contains("Queue is empty! No pieces to play.\n"));
        assert!(text.contains("Queue is empty!\n"));
        assert!(!text.contains("(ID: 7)"));
        assert!(remaining.is_empty());
    }

    #[test]
    fn session_reports_played_order() {
        let (text, remaining) = play(5, "2\n2\n3\n0\n");

        let played: Vec<&str> = text
            .lines()
            .filter_map(|line| line.split("Piece played: ").nth(1))
            .collect();

        assert_eq!(played.len(), 2);
        assert!(played[0].ends_with(" (ID: 1)"));
        assert!(played[1].ends_with(" (ID: 2)"));
        assert!(text.contains("Front: 2, Rear: 0\n"));
        assert_eq!(remaining, vec![3, 4, 5, 6]);
    }

    #[test]
    fn same_seed_same_session() {
        let input = "2\n3\n2\n3\n1\n0\n";

        assert_eq!(play(77, input), play(77, input));
    }
}
