//! The lex → parse → check → interpret pipeline.

use minipl_diagnostic::DiagnosticQueue;
use minipl_eval::{Interpreter, PrintHandlerImpl, SharedInputHandler, SharedPrintHandler};
use minipl_ir::Stmt;
use minipl_lexer::{lex, LexOutput};
use minipl_parse::{parse, ParseOutput};
use minipl_typeck::{check, TypeCheckResult};
use tracing::debug;

/// Result of the static stages over one source text.
pub struct Frontend {
    pub lexed: LexOutput,
    pub parsed: ParseOutput,
    /// `None` when lexing or parsing failed; the checker never sees a
    /// broken tree.
    pub typed: Option<TypeCheckResult>,
}

impl Frontend {
    /// Lex, parse, and (if both were clean) type check `source`.
    ///
    /// The parser runs even after lexical errors so that one run reports
    /// every syntax problem.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn analyze(source: &str) -> Self {
        let lexed = lex(source);
        let parsed = parse(&lexed.tokens);
        let typed = (!lexed.has_errors() && !parsed.has_errors())
            .then(|| check(&parsed.statements));
        Frontend {
            lexed,
            parsed,
            typed,
        }
    }

    /// The stage that stopped the run, or `Success` if none did.
    pub fn status(&self) -> crate::ExitStatus {
        if self.lexed.has_errors() || self.parsed.has_errors() {
            crate::ExitStatus::SyntaxError
        } else if self.typed.as_ref().is_some_and(TypeCheckResult::has_errors) {
            crate::ExitStatus::TypeError
        } else {
            crate::ExitStatus::Success
        }
    }

    /// All static diagnostics, lexical first, then parse, then type.
    pub fn diagnostics(&self) -> DiagnosticQueue {
        let mut queue = DiagnosticQueue::new();
        queue.extend(self.lexed.errors.iter().map(|e| e.to_diagnostic()));
        queue.extend(self.parsed.errors.iter().map(|e| e.to_diagnostic()));
        if let Some(typed) = &self.typed {
            queue.extend(typed.errors.iter().map(|e| e.to_diagnostic()));
        }
        queue
    }

    /// Report every static diagnostic to `print`.
    ///
    /// Returns the program when it is safe to run, otherwise the status
    /// the run stops with.
    pub fn report(&self, print: &PrintHandlerImpl) -> Result<&[Stmt], crate::ExitStatus> {
        let mut queue = self.diagnostics();
        let failed = queue.has_errors();
        for diagnostic in queue.flush() {
            print.report(&diagnostic);
        }
        match failed {
            None => Ok(&self.parsed.statements),
            Some(_) => Err(self.status()),
        }
    }
}

/// What a full run produced.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RunOutcome {
    pub status: crate::ExitStatus,
    /// Assertions that evaluated to false. They are reported but do not
    /// change the status.
    pub failed_assertions: usize,
}

impl RunOutcome {
    fn stopped(status: crate::ExitStatus) -> Self {
        RunOutcome {
            status,
            failed_assertions: 0,
        }
    }
}

/// Run `source` end to end.
///
/// Program output and every diagnostic go to `print`; `read` draws from
/// `input`.
pub fn run_source(
    source: &str,
    print: &SharedPrintHandler,
    input: SharedInputHandler,
) -> RunOutcome {
    let frontend = Frontend::analyze(source);
    let program = match frontend.report(print) {
        Ok(program) => program,
        Err(status) => return RunOutcome::stopped(status),
    };

    let mut interpreter = Interpreter::new(print.clone(), input);
    let status = match interpreter.interpret(program) {
        Ok(()) => crate::ExitStatus::Success,
        Err(err) => {
            print.report(&err.to_diagnostic());
            crate::ExitStatus::RuntimeError
        }
    };
    debug!(?status, "run finished");
    RunOutcome {
        status,
        failed_assertions: interpreter.failed_assertions(),
    }
}

/// Lex, parse, and type check `source` without running it.
pub fn check_source(source: &str, print: &PrintHandlerImpl) -> crate::ExitStatus {
    match Frontend::analyze(source).report(print) {
        Ok(_) => crate::ExitStatus::Success,
        Err(status) => status,
    }
}
