use crate::ErrorContext;

#[derive(Clone, Debug, PartialEq)]
pub struct ExtraErrInfo {
    // operands, offending tokens, etc...
    pub(crate) msg: String,
    pub(crate) context: ErrorContext,
}

impl ExtraErrInfo {
    pub fn none() -> Self {
        ExtraErrInfo {
            msg: String::new(),
            context: ErrorContext::Unknown,
        }
    }

    pub fn at_context(context: ErrorContext) -> Self {
        ExtraErrInfo {
            msg: String::new(),
            context,
        }
    }

    pub fn has_message(&self) -> bool {
        !self.msg.is_empty()
    }

    pub fn set_error_context(&mut self, context: ErrorContext) -> &mut Self {
        self.context = context;

        self
    }

    pub fn set_message(&mut self, msg: String) -> &mut Self {
        self.msg = msg;

        self
    }
}
