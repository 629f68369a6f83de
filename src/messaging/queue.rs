use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use rdkafka::{
    config::ClientConfig,
    producer::{FutureProducer, FutureRecord},
};

use crate::gateways::NotificationQueue;

/// Kafka-backed notification queue. Fire-and-forget from the caller's point
/// of view: a send either lands within the timeout or the error propagates,
/// no retry is attempted here.
pub struct KafkaQueue {
    producer: FutureProducer,
    topic: String,
}

impl KafkaQueue {
    pub fn new(brokers: &str, topic: impl Into<String>) -> Result<Self> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("message.timeout.ms", "5000")
            .create()?;

        Ok(Self { producer, topic: topic.into() })
    }
}

#[async_trait]
impl NotificationQueue for KafkaQueue {
    async fn enqueue_message(&self, key: &str, payload: &str) -> Result<()> {
        let record = FutureRecord::to(&self.topic).key(key).payload(payload);

        self.producer
            .send(record, rdkafka::util::Timeout::After(Duration::from_secs(5)))
            .await
            .map_err(|(e, _)| anyhow::anyhow!("Kafka send error: {}", e))?;

        tracing::info!(
            topic = %self.topic,
            key = %key,
            "Published removal notification"
        );
        Ok(())
    }
}
