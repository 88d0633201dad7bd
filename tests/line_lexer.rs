#[cfg(test)]
mod tests {
    use spiking_neural_network_logs::{
        extract::command_token,
        lexer::{lex_line, line_body},
    };

    #[test]
    pub fn test_command_and_attributes() {
        let parsed = lex_line(
            "12:00:01,002 - receive; id: n2; source: n1; timestamp: 3.5 ms; signal_intensity: 0.2 mV"
        ).unwrap();

        assert_eq!(parsed.command, "receive");
        assert_eq!(parsed.attributes.len(), 4);
        assert_eq!(parsed.get("id"), Some("n2"));
        assert_eq!(parsed.get("source"), Some("n1"));
        assert_eq!(parsed.get("timestamp"), Some("3.5 ms"));
        assert_eq!(parsed.get("signal_intensity"), Some("0.2 mV"));
        assert_eq!(parsed.get("last_fire"), None);
    }

    #[test]
    pub fn test_trailing_newlines_are_stripped() {
        let parsed = lex_line("t - fire; id: n1; last_fire: 0.0 ms\r\n").unwrap();

        assert_eq!(parsed.get("last_fire"), Some("0.0 ms"));
        assert_eq!(line_body("t - fire; id: n1\n"), Some("fire; id: n1"));
    }

    #[test]
    pub fn test_only_first_preamble_separator_is_discarded() {
        let parsed = lex_line("t0 - summary; description: a - b; neurons: 3").unwrap();

        assert_eq!(parsed.command, "summary");
        assert_eq!(parsed.get("description"), Some("a - b"));
        assert_eq!(parsed.get("neurons"), Some("3"));
    }

    #[test]
    pub fn test_value_split_only_once() {
        let parsed = lex_line("t - summary; note: time: 5 ms").unwrap();

        assert_eq!(parsed.get("note"), Some("time: 5 ms"));
    }

    #[test]
    pub fn test_coordinate_values_survive_lexing() {
        let parsed = lex_line(
            "t - topology; neuron_id: n1; location: (x=1 µm, y=2 µm, z=3 µm), norm=3.74 µm"
        ).unwrap();

        assert_eq!(parsed.get("location"), Some("(x=1 µm, y=2 µm, z=3 µm), norm=3.74 µm"));
    }

    #[test]
    pub fn test_lines_without_shape_are_not_lexed() {
        assert!(lex_line("framework noise without separator").is_none());
        assert!(lex_line("t - fire").is_none());
        assert!(lex_line("").is_none());
    }

    #[test]
    pub fn test_fragments_without_separator_are_ignored() {
        let parsed = lex_line("t - fire; id: n1; garbage; timestamp: 1 ms").unwrap();

        assert_eq!(parsed.attributes.len(), 2);
        assert!(!parsed.contains_key("garbage"));
    }

    #[test]
    pub fn test_command_token_matches_lexer() {
        let lines = [
            "t - fire; id: n1",
            "a - b - learn; id: n1",
            "t - networkConnected; pre_synaptic: a",
        ];

        for line in lines {
            assert_eq!(command_token(line), lex_line(line).map(|parsed| parsed.command).as_deref());
        }

        assert_eq!(command_token("t - fire"), None);
        assert_eq!(command_token("no separator; id: n1"), None);
    }
}
