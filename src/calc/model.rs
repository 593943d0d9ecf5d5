use crate::utils::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Operation {
    Add,
    Subtract,
}

impl Operation {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "+" => Ok(Operation::Add),
            "subtract" | "sub" | "-" => Ok(Operation::Subtract),
            _ => Err(CalcError::InvalidOperation {
                value: s.to_string(),
            }),
        }
    }
}

/// What to do when an `i64` result does not fit.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    #[default]
    Checked,
    Wrapping,
    Saturating,
}

impl TryFrom<String> for Operation {
    type Error = CalcError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculation {
    pub op: Operation,
    pub a: i64,
    pub b: i64,
}

/// A batch entry before its operation name has been checked.
#[derive(Debug, Deserialize)]
struct RawCalculation {
    op: String,
    a: i64,
    b: i64,
}

impl Calculation {
    pub fn new(op: Operation, a: i64, b: i64) -> Self {
        Self { op, a, b }
    }

    /// Parses a JSON array of `{"op", "a", "b"}` objects.
    ///
    /// Malformed JSON is a [`CalcError::SerializationError`]; an unknown
    /// operation name is a [`CalcError::InvalidOperation`].
    pub fn parse_batch(json: &str) -> crate::utils::error::Result<Vec<Calculation>> {
        let raw: Vec<RawCalculation> = serde_json::from_str(json)?;
        raw.into_iter()
            .map(|entry| Ok(Calculation::new(entry.op.parse()?, entry.a, entry.b)))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcOutcome {
    pub op: Operation,
    pub a: i64,
    pub b: i64,
    pub result: i64,
}

impl fmt::Display for CalcOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} = {}", self.a, self.op.symbol(), self.b, self.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_from_str() {
        assert_eq!("add".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!(" ADD ".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!("+".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!("sub".parse::<Operation>().unwrap(), Operation::Subtract);
        assert_eq!("-".parse::<Operation>().unwrap(), Operation::Subtract);

        let err = "multiply".parse::<Operation>().unwrap_err();
        assert!(matches!(err, CalcError::InvalidOperation { value } if value == "multiply"));
    }

    #[test]
    fn test_calculation_deserializes_aliases() {
        let calcs: Vec<Calculation> = serde_json::from_str(
            r#"[{"op":"add","a":5,"b":6},{"op":"-","a":10,"b":4},{"op":"sub","a":1,"b":2}]"#,
        )
        .unwrap();

        assert_eq!(calcs[0], Calculation::new(Operation::Add, 5, 6));
        assert_eq!(calcs[1].op, Operation::Subtract);
        assert_eq!(calcs[2].op, Operation::Subtract);
    }

    #[test]
    fn test_calculation_deserializes_any_case() {
        let calc: Calculation = serde_json::from_str(r#"{"op":"ADD","a":1,"b":2}"#).unwrap();
        assert_eq!(calc, Calculation::new(Operation::Add, 1, 2));

        let calc: Calculation = serde_json::from_str(r#"{"op":"Subtract","a":1,"b":2}"#).unwrap();
        assert_eq!(calc.op, Operation::Subtract);

        let json = serde_json::to_string(&calc).unwrap();
        assert!(json.contains(r#""op":"subtract""#));
    }

    #[test]
    fn test_parse_batch() {
        let calcs =
            Calculation::parse_batch(r#"[{"op":"ADD","a":5,"b":6},{"op":"Sub","a":10,"b":4}]"#)
                .unwrap();
        assert_eq!(
            calcs,
            vec![
                Calculation::new(Operation::Add, 5, 6),
                Calculation::new(Operation::Subtract, 10, 4),
            ]
        );
    }

    #[test]
    fn test_parse_batch_unknown_op_is_input_error() {
        let err = Calculation::parse_batch(r#"[{"op":"multiply","a":2,"b":3}]"#).unwrap_err();
        assert!(matches!(&err, CalcError::InvalidOperation { value } if value == "multiply"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_parse_batch_malformed_json() {
        let err = Calculation::parse_batch(r#"[{"op":"add","a":"five","b":6}]"#).unwrap_err();
        assert!(matches!(err, CalcError::SerializationError(_)));
    }

    #[test]
    fn test_outcome_display() {
        let outcome = CalcOutcome {
            op: Operation::Subtract,
            a: 10,
            b: 4,
            result: 6,
        };
        assert_eq!(outcome.to_string(), "10 - 4 = 6");

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["op"], "subtract");
        assert_eq!(json["result"], 6);
    }
}
