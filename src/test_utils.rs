//! Shared test utilities for berber-feedback

#[cfg(test)]
pub mod test_helpers {
    use crate::alert::ReplacePolicy;
    use crate::config::Config;
    use crate::feedback::Feedback;

    /// Route log output through the test harness
    pub fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Helper to create a clean Feedback context with default config
    pub fn test_feedback() -> Feedback {
        init_logging();
        let mut feedback = Feedback::new(&Config::default());
        feedback.clear_dirty();
        feedback
    }

    /// Helper to create a clean Feedback context that cancels replaced alerts
    pub fn cancel_policy_feedback() -> Feedback {
        init_logging();
        let mut config = Config::default();
        config.alert.replace_policy = ReplacePolicy::Cancel;
        let mut feedback = Feedback::new(&config);
        feedback.clear_dirty();
        feedback
    }
}
