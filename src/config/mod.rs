use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

/// Reference input for the duplicates exercise.
pub const DEFAULT_DUPLICATES_INPUT: [i64; 12] = [1, 3, 1, 2, 4, 5, 3, 6, 2, 7, 7, 8];

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "kata-lab")]
#[command(about = "Console exercises: a divisibility classifier and a duplicate finder")]
pub struct CliConfig {
    #[command(subcommand)]
    pub exercise: Exercise,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum Exercise {
    /// Label 1..=N by divisibility by 3 and 5 and print the joined sequence
    Fizzbuzz {
        #[arg(long, default_value = "100")]
        up_to: u64,
    },
    /// Print the values that occur more than once in the input list
    #[command(allow_negative_numbers = true)]
    Duplicates {
        /// Input values; the reference list is used when none are given
        #[arg(value_delimiter = ',', num_args = 0..)]
        values: Vec<i64>,

        #[arg(long, help = "Emit the duplicate list as JSON")]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fizzbuzz_default_bound() {
        let config = CliConfig::parse_from(["kata-lab", "fizzbuzz"]);
        match config.exercise {
            Exercise::Fizzbuzz { up_to } => assert_eq!(up_to, 100),
            other => panic!("unexpected subcommand: {:?}", other),
        }
    }

    #[test]
    fn test_duplicates_comma_separated_values() {
        let config = CliConfig::parse_from(["kata-lab", "duplicates", "1,2,2,3"]);
        match config.exercise {
            Exercise::Duplicates { values, json } => {
                assert_eq!(values, vec![1, 2, 2, 3]);
                assert!(!json);
            }
            other => panic!("unexpected subcommand: {:?}", other),
        }
    }

    #[test]
    fn test_duplicates_defaults_to_empty_values() {
        let config = CliConfig::parse_from(["kata-lab", "duplicates", "--json"]);
        match config.exercise {
            Exercise::Duplicates { values, json } => {
                assert!(values.is_empty());
                assert!(json);
            }
            other => panic!("unexpected subcommand: {:?}", other),
        }
    }
}
