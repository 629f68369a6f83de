mod queue;

pub use queue::KafkaQueue;
