//! Type matchup queries, independent of any battle

mod chart;
mod matchup;

pub use chart::{TypeChartRow, type_chart_rows};
pub use matchup::{
    Matchup,
    // Type-level queries
    immunities,
    is_immune_to,
    is_weak_to_any,
    query_effectiveness,
    query_effectiveness_by_name,
    resistances,
    resists_all,
    weaknesses,
};
