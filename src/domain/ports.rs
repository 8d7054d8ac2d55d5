use crate::utils::error::Result;

/// Terminal seam between the menu driver and the outside world. The
/// real console talks to stdin/stdout; tests script a session instead.
pub trait Console {
    /// Writes the prompt and reads one line. `None` means end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    fn write_line(&mut self, line: &str);
}
