use crate::error::Result;

/// Line-oriented console the counter dialogue talks through.
pub trait Console {
    /// Writes `message` without a newline and reads one line of input with
    /// its line terminator stripped.
    ///
    /// `field` names what is being asked for; it is reported if the input
    /// closes before a line arrives.
    fn prompt(&mut self, field: &'static str, message: &str) -> Result<String>;

    /// Writes `text` followed by a newline.
    fn say(&mut self, text: &str) -> Result<()>;
}
