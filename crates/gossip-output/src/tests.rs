//! Tests for gossip-output.

use gossip_sim::{SimBuilder, SimObserver, TickView};

fn scenario_a() -> Vec<Vec<i64>> {
    vec![vec![3, 1, 2, 3], vec![3, 2, 3, 1], vec![4, 2, 3, 4, 5]]
}

/// Keeps the rendering of every tick.
struct Rendered(Vec<String>);

impl SimObserver for Rendered {
    fn on_tick(&mut self, view: &TickView<'_>) {
        self.0.push(crate::render_tick(view));
    }
}

#[cfg(test)]
mod render_tests {
    use super::*;

    #[test]
    fn first_tick_layout() {
        let mut obs = Rendered(vec![]);
        SimBuilder::from_stops(scenario_a()).build().unwrap().evaluate(&mut obs);

        // Tick 0: drivers 0 and 1 share stop 3.
        assert_eq!(
            obs.0[0],
            "t = 0\n\
             0\t[110]\t3*\t1\t2\t3\n\
             1\t[110]\t3*\t2\t3\t1\n\
             2\t[001]\t4*\t2\t3\t4\t5\n"
        );
    }

    #[test]
    fn marker_follows_position() {
        let mut obs = Rendered(vec![]);
        SimBuilder::from_stops(scenario_a()).build().unwrap().evaluate(&mut obs);

        // Tick 1: drivers 1 and 2 share stop 2.
        assert_eq!(
            obs.0[1],
            "t = 1\n\
             0\t[110]\t3\t1*\t2\t3\n\
             1\t[111]\t3\t2*\t3\t1\n\
             2\t[111]\t4\t2*\t3\t4\t5\n"
        );
    }

    #[test]
    fn one_block_per_tick() {
        let mut obs = Rendered(vec![]);
        SimBuilder::from_stops(scenario_a()).build().unwrap().evaluate(&mut obs);
        assert_eq!(obs.0.len(), 5);
        assert!(obs.0[4].starts_with("t = 4\n"));
    }
}

#[cfg(test)]
mod text_tests {
    use super::*;
    use crate::TextObserver;

    #[test]
    fn writes_every_tick() {
        let mut obs = TextObserver::new(Vec::<u8>::new());
        SimBuilder::from_stops(scenario_a()).build().unwrap().evaluate(&mut obs);
        assert!(obs.take_error().is_none());

        let text = String::from_utf8(obs.into_writer()).unwrap();
        assert_eq!(text.matches("t = ").count(), 5);
        assert!(text.contains("t = 4\n"));
    }

    #[test]
    fn keeps_first_write_error() {
        struct Broken;
        impl std::io::Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("disk full"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut obs = TextObserver::new(Broken);
        let outcome = SimBuilder::from_stops(scenario_a()).build().unwrap().evaluate(&mut obs);
        assert_eq!(outcome.to_string(), "5");
        let err = obs.take_error().expect("error stored");
        assert!(err.to_string().contains("disk full"));
        assert!(obs.take_error().is_none());
    }
}

#[cfg(test)]
mod csv_tests {
    use super::*;
    use crate::CsvTraceObserver;

    #[test]
    fn header_and_rows() {
        let mut obs = CsvTraceObserver::from_writer(Vec::<u8>::new()).unwrap();
        SimBuilder::from_stops(scenario_a()).build().unwrap().evaluate(&mut obs);
        assert!(obs.take_error().is_none());

        let text = String::from_utf8(obs.into_inner().unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "tick,driver,position,stop,knowledge,known_count");
        // 5 ticks × 3 drivers.
        assert_eq!(lines.len(), 1 + 15);
        assert_eq!(lines[1], "0,0,0,3,110,2");
        assert_eq!(lines[3], "0,2,0,4,001,1");
        assert!(lines[15].ends_with(",111,3"));
    }

    #[test]
    fn writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.csv");
        let mut obs = CsvTraceObserver::create(&path).unwrap();
        SimBuilder::from_stops(vec![vec![1, 2], vec![1, 2]])
            .build()
            .unwrap()
            .evaluate(&mut obs);
        assert!(obs.take_error().is_none());
        drop(obs);

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("0,1,0,1,11,2"));
    }
}
