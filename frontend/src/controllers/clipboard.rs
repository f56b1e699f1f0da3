use crate::error::ClipboardError;

pub const COPIED: &str = "Email copied!";
pub const COPY_FALLBACK: &str = "Couldn’t copy email—please copy manually.";

pub fn copy_notice(result: &Result<(), ClipboardError>) -> &'static str {
    match result {
        Ok(()) => COPIED,
        Err(_) => COPY_FALLBACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_failure_gets_the_manual_fallback() {
        assert_eq!(copy_notice(&Ok(())), COPIED);
        assert_eq!(copy_notice(&Err(ClipboardError::Unavailable)), COPY_FALLBACK);
        assert_eq!(
            copy_notice(&Err(ClipboardError::Rejected("denied".into()))),
            COPY_FALLBACK
        );
    }
}
