//! Line-oriented UI for piped or redirected input.

use std::io::{BufRead, BufReader, Write};

use crate::error::{AuditError, Result};

use super::theme::AuditTheme;
use super::{answer_or_default, OutputMode, Prompt, PromptResult, SpinnerHandle, UserInterface};

/// UI that reads answers one line at a time.
///
/// Used when standard input is not a terminal, so menu choices and prompt
/// answers can be scripted. Password prompts read a plain line; there is no
/// terminal to hide the echo on.
pub struct LineUI {
    mode: OutputMode,
    theme: AuditTheme,
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
}

impl LineUI {
    /// Read from standard input and write to standard output.
    pub fn new(mode: OutputMode, colors: bool) -> Self {
        Self::with_io(
            mode,
            AuditTheme::for_colors(colors),
            Box::new(BufReader::new(std::io::stdin())),
            Box::new(std::io::stdout()),
        )
    }

    /// Use the given reader and writer.
    pub fn with_io(
        mode: OutputMode,
        theme: AuditTheme,
        input: Box<dyn BufRead>,
        output: Box<dyn Write>,
    ) -> Self {
        Self {
            mode,
            theme,
            input,
            output,
        }
    }

    fn line(&mut self, text: &str) {
        writeln!(self.output, "{}", text).ok();
    }
}

impl UserInterface for LineUI {
    fn message(&mut self, msg: &str) {
        self.line(msg);
    }

    fn success(&mut self, msg: &str) {
        let text = self.theme.format_success(msg);
        self.line(&text);
    }

    fn warning(&mut self, msg: &str) {
        let text = self.theme.format_warning(msg);
        self.line(&text);
    }

    fn error(&mut self, msg: &str) {
        let text = self.theme.format_error(msg);
        self.line(&text);
    }

    fn version_line(&mut self, name: &str, version: &str, eol: bool) {
        let text = self.theme.format_version(name, version, eol);
        self.line(&text);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        match &prompt.default {
            Some(default) => write!(self.output, "{} [{}]: ", prompt.question, default),
            None => write!(self.output, "{}: ", prompt.question),
        }
        .ok();
        self.output.flush().ok();

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            writeln!(self.output).ok();
            return Err(AuditError::InputClosed);
        }

        Ok(PromptResult::String(answer_or_default(prompt, &answer)))
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            self.line(message);
        }
        Box::new(NoopSpinner)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            let text = self.theme.format_header(title);
            writeln!(self.output, "\n{}\n", text).ok();
        }
    }
}

/// Spinner stand-in; the start message is the only line written and
/// failures are reported by the caller.
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn finish_error(&mut self, _msg: &str) {}

    fn finish_clear(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::PromptType;
    use std::io::Cursor;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn ui(input: &str) -> (LineUI, SharedBuf) {
        let out = SharedBuf::default();
        let ui = LineUI::with_io(
            OutputMode::Normal,
            AuditTheme::plain(),
            Box::new(Cursor::new(input.to_string().into_bytes())),
            Box::new(out.clone()),
        );
        (ui, out)
    }

    #[test]
    fn prompt_reads_one_line() {
        let (mut ui, out) = ui("contoso\nPlatform\n");
        let first = ui.prompt(&Prompt::input("org", "Organization")).unwrap();
        let second = ui.prompt(&Prompt::input("project", "Project")).unwrap();

        assert_eq!(first.into_string(), "contoso");
        assert_eq!(second.into_string(), "Platform");
        assert!(out.text().contains("Organization: "));
    }

    #[test]
    fn prompt_uses_default_for_blank_line() {
        let (mut ui, out) = ui("\n");
        let answer = ui
            .prompt(&Prompt::input("channel", "Channel").with_default("STS"))
            .unwrap();

        assert_eq!(answer.into_string(), "STS");
        assert!(out.text().contains("Channel [STS]: "));
    }

    #[test]
    fn prompt_handles_crlf() {
        let (mut ui, _) = ui("3\r\n");
        let answer = ui.prompt(&Prompt::input("choice", "Select")).unwrap();
        assert_eq!(answer.into_string(), "3");
    }

    #[test]
    fn password_prompt_reads_plain_line() {
        let (mut ui, _) = ui("secret\n");
        let prompt = Prompt::password("pat", "Token");
        assert_eq!(prompt.prompt_type, PromptType::Password);
        assert_eq!(ui.prompt(&prompt).unwrap().into_string(), "secret");
    }

    #[test]
    fn eof_is_input_closed() {
        let (mut ui, _) = ui("");
        let err = ui.prompt(&Prompt::input("choice", "Select")).unwrap_err();
        assert!(err.is_input_closed());
    }

    #[test]
    fn version_line_marks_eol() {
        let (mut ui, out) = ui("");
        ui.version_line("Framework: v4.0", "4.0.0.0", true);
        ui.version_line("Core: Microsoft.NETCore.App", "8.0.1", false);

        let text = out.text();
        assert!(text.contains("Framework: v4.0 - 4.0.0.0 [EOL]\n"));
        assert!(text.contains("Core: Microsoft.NETCore.App - 8.0.1\n"));
    }

    #[test]
    fn quiet_mode_hides_header() {
        let out = SharedBuf::default();
        let mut ui = LineUI::with_io(
            OutputMode::Quiet,
            AuditTheme::plain(),
            Box::new(Cursor::new(Vec::new())),
            Box::new(out.clone()),
        );
        ui.show_header("dotnet-audit");
        ui.message("1. Scan");

        assert!(!out.text().contains("dotnet-audit"));
        assert!(out.text().contains("1. Scan"));
    }

    #[test]
    fn failed_spinner_writes_only_its_start_line() {
        let (mut ui, out) = ui("");
        let mut spinner = ui.start_spinner("Creating work item...");
        spinner.finish_error("Work item not created");
        ui.error("Failed to create work item: HTTP 500");

        let text = out.text();
        assert_eq!(text.matches("Creating work item...").count(), 1);
        assert!(!text.contains("Work item not created"));
        assert_eq!(text.matches("✗").count(), 1);
    }

    #[test]
    fn errors_are_written_to_output() {
        let (mut ui, out) = ui("");
        ui.error("Invalid organization: must not be blank");
        assert!(out.text().contains("✗ Invalid organization"));
    }
}
