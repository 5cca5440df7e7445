#![deny(unused_imports)]

use colored::Colorize;

mod ctxt;
mod extra_info;
mod fmt;
mod kind;


pub use ctxt::ErrorContext;
pub use extra_info::ExtraErrInfo;
pub use kind::{FractionErrorKind, InputErrorKind};

/// Every fallible operation on a fraction returns this.
/// There's no recovery at the call site: the caller gets it as-is.
#[derive(Clone, Debug, PartialEq)]
pub struct FractionError {
    kind: FractionErrorKind,
    extra: ExtraErrInfo,
}

impl FractionError {
    pub fn invalid_argument() -> Self {
        FractionError {
            kind: FractionErrorKind::InvalidArgument,
            extra: ExtraErrInfo::none(),
        }
    }

    pub fn divide_by_zero() -> Self {
        FractionError {
            kind: FractionErrorKind::DivideByZero,
            extra: ExtraErrInfo::none(),
        }
    }

    /// `numer` and `denom` are the widened intermediates that didn't fit.
    pub fn overflow(numer: i64, denom: i64) -> Self {
        FractionError {
            kind: FractionErrorKind::Overflow { numer, denom },
            extra: ExtraErrInfo::none(),
        }
    }

    pub fn input_error(kind: InputErrorKind) -> Self {
        FractionError {
            kind: FractionErrorKind::InputError(kind),
            extra: ExtraErrInfo::at_context(ErrorContext::Parsing),
        }
    }

    pub fn kind(&self) -> &FractionErrorKind {
        &self.kind
    }

    pub fn context(&self) -> ErrorContext {
        self.extra.context
    }

    pub fn message(&self) -> Option<&str> {
        if self.extra.has_message() {
            Some(&self.extra.msg)
        }

        else {
            None
        }
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self.kind, FractionErrorKind::Overflow { .. })
    }

    pub fn is_divide_by_zero(&self) -> bool {
        matches!(self.kind, FractionErrorKind::DivideByZero)
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, FractionErrorKind::InvalidArgument)
    }

    pub fn is_input_error(&self) -> bool {
        matches!(self.kind, FractionErrorKind::InputError(_))
    }

    pub fn set_message(&mut self, message: String) -> &mut Self {
        self.extra.set_message(message);

        self
    }

    pub fn set_err_context(&mut self, context: ErrorContext) -> &mut Self {
        self.extra.set_error_context(context);

        self
    }

    // sets the error context when,
    // 1. it's not set previously
    // 2. the given context is not none
    pub fn try_set_err_context(&mut self, context: Option<ErrorContext>) -> &mut Self {
        if self.extra.context == ErrorContext::Unknown {
            if let Some(context) = context {
                self.extra.context = context;
            }
        }

        self
    }

    /// Same as `try_set_err_context`, but consumes and returns `self`.
    /// It's handy inside `map_err`.
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.try_set_err_context(Some(context));

        self
    }

    pub fn render_error(&self, render_title: bool) -> String {
        let title = if render_title {
            format!("{}\n", render_error_title(self.extra.context))
        } else {
            String::new()
        };

        let msg = format!("E{:04}: {}", self.kind.index(), self.kind.msg());
        let help = match self.kind.help() {
            s if s.is_empty() => String::new(),
            s => format!("\nHelp: {s}"),
        };
        let extra_msg = match &self.extra.msg {
            s if s.is_empty() => String::new(),
            s => format!("\nNote: {s}"),
        };

        format!("{title}{msg}{help}{extra_msg}")
    }
}

impl std::error::Error for FractionError {}

pub(crate) fn render_error_title(context: ErrorContext) -> String {
    let context = match context {
        ErrorContext::Unknown => String::new(),
        context => format!(" while {context}"),
    };

    format!("[Error{context}]").red().to_string()
}
