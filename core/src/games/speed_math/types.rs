use std::fmt;

pub const ROUND_SECONDS: u64 = 60;
pub const POINTS_PER_ANSWER: u32 = 10;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
}

impl Operator {
    pub const ALL: [Operator; 3] = [Operator::Add, Operator::Subtract, Operator::Multiply];

    pub fn apply(self, a: i32, b: i32) -> i32 {
        match self {
            Operator::Add => a + b,
            Operator::Subtract => a - b,
            Operator::Multiply => a * b,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
        };
        write!(f, "{}", symbol)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Question {
    pub a: i32,
    pub b: i32,
    pub op: Operator,
}

impl Question {
    pub fn answer(&self) -> i32 {
        self.op.apply(self.a, self.b)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.a, self.op, self.b)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AnswerOutcome {
    Correct,
    Wrong,
    /// Unparseable input; counts like a wrong answer.
    NotANumber,
    RoundOver,
}
