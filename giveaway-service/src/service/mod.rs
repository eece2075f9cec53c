pub mod candidates;
pub mod flow;
pub mod notifier;
pub mod shutdown;

pub use candidates::FileCandidateSource;
pub use flow::ServiceFlow;
pub use notifier::LogNotificationSink;
pub use shutdown::cancel_on_signal;
