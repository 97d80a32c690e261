//! Unit tests for gossip-routes.

#[cfg(test)]
mod loader_tests {
    use std::io::{Cursor, Write};

    use crate::{RouteLoadError, load_routes_path, load_routes_reader, parse_route_line};

    #[test]
    fn parses_routes_of_different_lengths() {
        let text = "3,1,2,3\n3,2,3,1\n4,2,3,4,5\n";
        let routes = load_routes_reader(Cursor::new(text)).unwrap();
        assert_eq!(
            routes,
            vec![vec![3, 1, 2, 3], vec![3, 2, 3, 1], vec![4, 2, 3, 4, 5]]
        );
    }

    #[test]
    fn skips_comments_and_trims() {
        let text = "# header comment\n 7 , 11,2\n#another\n-4,0\n";
        let routes = load_routes_reader(Cursor::new(text)).unwrap();
        assert_eq!(routes, vec![vec![7, 11, 2], vec![-4, 0]]);
    }

    #[test]
    fn skips_blank_lines() {
        let text = "1,2\n\n3,4\n";
        let routes = load_routes_reader(Cursor::new(text)).unwrap();
        assert_eq!(routes, vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn empty_file_gives_no_routes() {
        let routes = load_routes_reader(Cursor::new("# nothing here\n")).unwrap();
        assert!(routes.is_empty());
    }

    #[test]
    fn bad_stop_reports_line() {
        let text = "1,2\n3,x\n";
        let err = load_routes_reader(Cursor::new(text)).unwrap_err();
        match err {
            RouteLoadError::Parse { line, msg } => {
                assert_eq!(line, 2);
                assert!(msg.contains("\"x\""), "got {msg}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# 2 drivers").unwrap();
        writeln!(file, "2,1,2").unwrap();
        writeln!(file, "5,2,8").unwrap();
        let routes = load_routes_path(file.path()).unwrap();
        assert_eq!(routes, vec![vec![2, 1, 2], vec![5, 2, 8]]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_routes_path(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, RouteLoadError::Io(_)));
    }

    #[test]
    fn parse_line() {
        assert_eq!(parse_route_line("4, 6,7 ,8").unwrap(), vec![4, 6, 7, 8]);
        assert_eq!(parse_route_line("9\n").unwrap(), vec![9]);
        assert!(parse_route_line("4,,5").is_err());
    }
}

#[cfg(test)]
mod canned_tests {
    use crate::{CannedRoute, RouteLoadError};

    #[test]
    fn table_has_six_entries() {
        assert_eq!(CannedRoute::ALL.len(), 6);
        assert_eq!(CannedRoute::get(3).unwrap().driver_count(), 14);
        assert_eq!(CannedRoute::get(2).unwrap().driver_count(), 7);
    }

    #[test]
    fn to_stops_copies_table() {
        let stops = CannedRoute::get(1).unwrap().to_stops();
        assert_eq!(stops, vec![vec![2, 1, 2], vec![5, 2, 8]]);
    }

    #[test]
    fn out_of_range_index() {
        let err = CannedRoute::get(6).unwrap_err();
        assert!(matches!(err, RouteLoadError::UnknownCanned { index: 6, max: 5 }));
        assert_eq!(err.to_string(), "bad canned route index 6: must be in [0-5]");
    }

    #[test]
    fn every_route_non_empty() {
        for canned in CannedRoute::ALL {
            assert!(canned.stops.iter().all(|r| !r.is_empty()), "{}", canned.description);
        }
    }
}

#[cfg(test)]
mod console_tests {
    use std::io::Cursor;

    use crate::read_routes_interactive;

    #[test]
    fn reads_until_blank_line() {
        let input = Cursor::new("1,2,3\n4, 5\n\n9,9\n");
        let mut out: Vec<u8> = Vec::new();
        let routes = read_routes_interactive(input, &mut out).unwrap();
        assert_eq!(routes, vec![vec![1, 2, 3], vec![4, 5]]);

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Enter routes as integers separated by commas.\n"));
        assert!(text.contains("Enter route #: 0 => "));
        assert!(text.contains("Enter route #: 2 => "));
    }

    #[test]
    fn stops_at_eof() {
        let routes = read_routes_interactive(Cursor::new("7,8"), Vec::<u8>::new()).unwrap();
        assert_eq!(routes, vec![vec![7, 8]]);
    }

    #[test]
    fn bad_line_reprompts_same_number() {
        let input = Cursor::new("1,a\n1,2\n\n");
        let mut out: Vec<u8> = Vec::new();
        let routes = read_routes_interactive(input, &mut out).unwrap();
        assert_eq!(routes, vec![vec![1, 2]]);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Error: route parse error"));
        assert_eq!(text.matches("Enter route #: 0 => ").count(), 2);
    }
}
