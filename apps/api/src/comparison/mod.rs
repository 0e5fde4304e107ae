// Side-by-side comparison of a visitor's company and a competitor.

pub mod breakdown;
pub mod compare;
pub mod handlers;
pub mod scorecard;
