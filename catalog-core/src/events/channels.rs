//! The notification channel and its subscription handles.
//!
//! Each stream is a registry of unbounded `tokio::sync::mpsc` senders, one
//! per subscription. Publishing clones the value into every live queue, so a
//! subscriber never loses a notification however far behind it is. The
//! senders live as long as any clone of the channel does.

use super::types::StreamName;
use catalog_sdk::objects::Product;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;
use tracing::{debug, trace};

/// Process-wide hub with one multicast stream per [`StreamName`].
///
/// Cloning is cheap and every clone publishes to the same streams; create
/// one at startup and hand clones to each view.
#[derive(Clone)]
pub struct NotificationChannel {
    product_to_edit: Stream<Product>,
    product_edited: Stream<Product>,
    product_added: Stream<Product>,
    message_updated: Stream<String>,
}

impl Default for NotificationChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationChannel {
    pub fn new() -> Self {
        Self {
            product_to_edit: Stream::new(StreamName::ProductToEdit),
            product_edited: Stream::new(StreamName::ProductEdited),
            product_added: Stream::new(StreamName::ProductAdded),
            message_updated: Stream::new(StreamName::MessageUpdated),
        }
    }

    pub fn notify_product_to_edit(&self, product: Product) {
        self.product_to_edit.publish(product);
    }

    pub fn notify_product_edited(&self, product: Product) {
        self.product_edited.publish(product);
    }

    pub fn notify_product_added(&self, product: Product) {
        self.product_added.publish(product);
    }

    pub fn notify_message_updated(&self, message: impl Into<String>) {
        self.message_updated.publish(message.into());
    }

    pub fn subscribe_product_to_edit(&self) -> Subscription<Product> {
        self.product_to_edit.subscribe()
    }

    pub fn subscribe_product_edited(&self) -> Subscription<Product> {
        self.product_edited.subscribe()
    }

    pub fn subscribe_product_added(&self) -> Subscription<Product> {
        self.product_added.subscribe()
    }

    pub fn subscribe_message_updated(&self) -> Subscription<String> {
        self.message_updated.subscribe()
    }

    /// Number of live subscriptions on `stream`.
    pub fn subscriber_count(&self, stream: StreamName) -> usize {
        match stream {
            StreamName::ProductToEdit => self.product_to_edit.live(),
            StreamName::ProductEdited => self.product_edited.live(),
            StreamName::ProductAdded => self.product_added.live(),
            StreamName::MessageUpdated => self.message_updated.live(),
        }
    }
}

/// One named stream: the senders of every subscription still registered.
#[derive(Clone)]
struct Stream<T> {
    name: StreamName,
    subscribers: Arc<Mutex<Vec<mpsc::UnboundedSender<T>>>>,
}

impl<T> Stream<T> {
    fn new(name: StreamName) -> Self {
        Self {
            name,
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Lock the registry and forget subscriptions whose handle was dropped.
    /// A poisoned lock is recovered.
    fn registry(&self) -> MutexGuard<'_, Vec<mpsc::UnboundedSender<T>>> {
        let mut subscribers = self.subscribers.lock().unwrap_or_else(PoisonError::into_inner);
        subscribers.retain(|sender| !sender.is_closed());
        subscribers
    }

    fn live(&self) -> usize {
        self.registry().len()
    }

    fn subscribe(&self) -> Subscription<T> {
        let (sender, receiver) = mpsc::unbounded_channel();
        self.registry().push(sender);
        debug!(stream = %self.name, "Subscribed");
        Subscription {
            stream: self.name,
            receiver,
        }
    }
}

impl<T: Clone + std::fmt::Debug> Stream<T> {
    /// Fire-and-forget send. Publishing with no subscribers is a no-op.
    fn publish(&self, value: T) {
        trace!(stream = %self.name, ?value, "Publishing notification");
        let senders = self.registry().clone();
        if senders.is_empty() {
            trace!(stream = %self.name, "No subscribers, notification dropped");
            return;
        }
        let receivers = senders
            .iter()
            .filter(|sender| sender.send(value.clone()).is_ok())
            .count();
        debug!(stream = %self.name, receivers, "Notification published");
    }
}

/// A live subscription to one stream.
///
/// Pending notifications queue up without bound until taken. Dropping the
/// handle (or calling [`unsubscribe`](Subscription::unsubscribe)) releases
/// it; other subscribers of the same stream are unaffected.
pub struct Subscription<T> {
    stream: StreamName,
    receiver: mpsc::UnboundedReceiver<T>,
}

impl<T> Subscription<T> {
    /// Wait for the next notification.
    ///
    /// Returns `None` once every clone of the channel has been dropped.
    pub async fn recv(&mut self) -> Option<T> {
        self.receiver.recv().await
    }

    /// Take the next pending notification without waiting.
    pub fn try_recv(&mut self) -> Option<T> {
        self.receiver.try_recv().ok()
    }

    /// Take every pending notification, oldest first.
    pub fn drain(&mut self) -> Vec<T> {
        std::iter::from_fn(|| self.try_recv()).collect()
    }

    /// Release the subscription.
    pub fn unsubscribe(self) {
        debug!(stream = %self.stream, "Unsubscribed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(barcode: &str) -> Product {
        Product::new(barcode, format!("Product {barcode}"))
    }

    #[test]
    fn test_publish_without_subscribers_is_a_noop() {
        let channel = NotificationChannel::new();
        channel.notify_product_added(product("1"));
        channel.notify_message_updated("nobody listens");
        for stream in StreamName::ALL {
            assert_eq!(channel.subscriber_count(stream), 0);
        }
    }

    #[test]
    fn test_every_early_subscriber_gets_the_value_late_ones_get_nothing() {
        let channel = NotificationChannel::new();
        let mut first = channel.subscribe_product_added();
        let mut second = channel.subscribe_product_added();

        let p = product("123").with_tags(["a", "b"]);
        channel.notify_product_added(p.clone());

        let mut late = channel.subscribe_product_added();

        assert_eq!(first.try_recv(), Some(p.clone()));
        assert_eq!(second.try_recv(), Some(p));
        assert_eq!(late.try_recv(), None);
    }

    #[test]
    fn test_streams_are_independent() {
        let channel = NotificationChannel::new();
        let mut added = channel.subscribe_product_added();
        let mut edited = channel.subscribe_product_edited();
        let mut to_edit = channel.subscribe_product_to_edit();
        let mut messages = channel.subscribe_message_updated();

        channel.notify_product_edited(product("1"));

        assert_eq!(edited.drain(), vec![product("1")]);
        assert!(added.drain().is_empty());
        assert!(to_edit.drain().is_empty());
        assert!(messages.drain().is_empty());
    }

    #[test]
    fn test_delivery_follows_publish_order() {
        let channel = NotificationChannel::new();
        let mut messages = channel.subscribe_message_updated();

        for i in 0..5 {
            channel.notify_message_updated(format!("message {i}"));
        }

        assert_eq!(
            messages.drain(),
            (0..5).map(|i| format!("message {i}")).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_unsubscribe_leaves_other_subscribers_alone() {
        let channel = NotificationChannel::new();
        let gone = channel.subscribe_product_to_edit();
        let mut kept = channel.subscribe_product_to_edit();
        assert_eq!(channel.subscriber_count(StreamName::ProductToEdit), 2);

        channel.notify_product_to_edit(product("1"));
        gone.unsubscribe();
        channel.notify_product_to_edit(product("2"));

        assert_eq!(channel.subscriber_count(StreamName::ProductToEdit), 1);
        assert_eq!(kept.drain(), vec![product("1"), product("2")]);
    }

    #[test]
    fn test_slow_subscriber_receives_every_notification() {
        let channel = NotificationChannel::new();
        let mut added = channel.subscribe_product_added();

        for i in 0..200 {
            channel.notify_product_added(product(&i.to_string()));
        }

        let received = added.drain();
        assert_eq!(received.len(), 200);
        assert_eq!(received.first(), Some(&product("0")));
        assert_eq!(received.last(), Some(&product("199")));
    }

    #[test]
    fn test_dropped_subscription_is_forgotten() {
        let channel = NotificationChannel::new();
        let added = channel.subscribe_product_added();
        assert_eq!(channel.subscriber_count(StreamName::ProductAdded), 1);

        drop(added);
        channel.notify_product_added(product("1"));

        assert_eq!(channel.subscriber_count(StreamName::ProductAdded), 0);
    }

    #[tokio::test]
    async fn test_recv_waits_for_the_next_publish() {
        let channel = NotificationChannel::new();
        let mut edited = channel.subscribe_product_edited();

        let publisher = channel.clone();
        let handle = tokio::spawn(async move {
            publisher.notify_product_edited(product("9"));
        });

        assert_eq!(edited.recv().await, Some(product("9")));
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_recv_ends_when_channel_is_gone() {
        let channel = NotificationChannel::new();
        let mut messages = channel.subscribe_message_updated();
        drop(channel);
        assert_eq!(messages.recv().await, None);
    }
}
