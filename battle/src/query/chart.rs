//! Row-by-row view of the type chart

use crate::types::{Effectiveness, Type};

/// Non-neutral matchups of one attacking type
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeChartRow {
    pub attacking: Type,
    pub super_effective: Vec<Type>,
    pub not_very_effective: Vec<Type>,
    pub no_effect: Vec<Type>,
}

/// One row per attacking type, in chart order
pub fn type_chart_rows() -> Vec<TypeChartRow> {
    Type::all()
        .iter()
        .map(|&attacking| {
            let mut row = TypeChartRow {
                attacking,
                super_effective: Vec::new(),
                not_very_effective: Vec::new(),
                no_effect: Vec::new(),
            };

            for &defending in Type::all() {
                match Effectiveness::from_multiplier(attacking.effectiveness(defending)) {
                    Effectiveness::SuperEffective => row.super_effective.push(defending),
                    Effectiveness::NotVeryEffective => row.not_very_effective.push(defending),
                    Effectiveness::NoEffect => row.no_effect.push(defending),
                    Effectiveness::Normal => {}
                }
            }

            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_cover_all_types() {
        let rows = type_chart_rows();
        assert_eq!(rows.len(), 18);
        assert_eq!(rows[0].attacking, Type::Normal);
        assert_eq!(rows[0].no_effect, vec![Type::Ghost]);
        assert_eq!(rows[0].not_very_effective, vec![Type::Rock, Type::Steel]);
        assert!(rows[0].super_effective.is_empty());
    }

    #[test]
    fn test_electric_row() {
        let electric = &type_chart_rows()[Type::Electric as usize];
        assert_eq!(electric.super_effective, vec![Type::Water, Type::Flying]);
        assert_eq!(electric.no_effect, vec![Type::Ground]);
    }
}
