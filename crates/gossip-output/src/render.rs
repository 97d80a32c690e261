//! Text rendering of one tick.
//!
//! ```text
//! t = 1
//! 0	[110]	3	1*	2	3
//! 1	[110]	3	2*	3	1
//! 2	[001]	4	2*	3	4	5
//! ```
//!
//! Knowledge is printed least-significant bit first, one character per
//! driver.  The occupied stop carries a trailing `*`.

use std::fmt::Write;

use gossip_sim::TickView;

/// Render `view` as the multi-line block shown above, newline-terminated.
pub fn render_tick(view: &TickView<'_>) -> String {
    let n = view.driver_count();
    let mut s = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(s, "t = {}", view.tick.0);
    for driver in view.routes.drivers() {
        let i = driver.index();
        let _ = write!(s, "{i}\t[{}]", view.knowledge[i].render(n));
        for (pos, stop) in view.routes.route(driver).stops().iter().enumerate() {
            let _ = write!(s, "\t{}", stop.0);
            if pos == view.positions[i] {
                s.push('*');
            }
        }
        s.push('\n');
    }
    s
}
