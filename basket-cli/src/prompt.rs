//! Console access for interactive prompts and command output.

use std::io::{BufRead, Write};

use camino::Utf8PathBuf;

use crate::CliError;

/// Streams used by a CLI invocation.
///
/// Prompts go to their own stream so that output written with `--stdout`
/// stays valid JSON. Borrowing the streams lets tests drive prompts from byte
/// buffers.
pub struct Console<'a> {
    input: &'a mut dyn BufRead,
    prompt: &'a mut dyn Write,
    output: &'a mut dyn Write,
}

impl<'a> Console<'a> {
    /// Wrap the answer source, the prompt sink, and the output sink.
    #[must_use]
    pub const fn new(
        input: &'a mut dyn BufRead,
        prompt: &'a mut dyn Write,
        output: &'a mut dyn Write,
    ) -> Self {
        Self {
            input,
            prompt,
            output,
        }
    }

    /// Write `question`, then read one line and return it as a path.
    ///
    /// Surrounding whitespace is trimmed; an empty answer or end of input
    /// yields [`CliError::EmptyPromptResponse`].
    pub(crate) fn ask_path(
        &mut self,
        question: &str,
        field: &'static str,
    ) -> Result<Utf8PathBuf, CliError> {
        self.prompt
            .write_all(question.as_bytes())
            .and_then(|()| self.prompt.flush())
            .map_err(CliError::Prompt)?;
        let mut answer = String::new();
        self.input
            .read_line(&mut answer)
            .map_err(CliError::Prompt)?;
        let trimmed = answer.trim();
        if trimmed.is_empty() {
            return Err(CliError::EmptyPromptResponse { field });
        }
        Ok(Utf8PathBuf::from(trimmed))
    }

    /// Stream receiving the cover and confirmation messages.
    pub(crate) fn output(&mut self) -> &mut dyn Write {
        &mut *self.output
    }
}
