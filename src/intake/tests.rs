//! Intake Module Tests
//!
//! Exercises the submit handler directly with a recording queue fake:
//! validation short-circuits, id uniqueness, and queue failure mapping.

#[cfg(test)]
mod tests {
    use crate::intake::handlers::handle_submit_distance;
    use crate::intake::types::{DistanceRequest, IntakeResponse};
    use crate::queue::WorkQueue;
    use crate::queue::types::WorkItem;

    use anyhow::Result;
    use async_trait::async_trait;
    use axum::{Extension, Json, http::StatusCode};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts enqueues; optionally rejects them all.
    struct RecordingQueue {
        enqueued: AtomicUsize,
        reject: bool,
    }

    impl RecordingQueue {
        fn accepting() -> Arc<Self> {
            Arc::new(Self {
                enqueued: AtomicUsize::new(0),
                reject: false,
            })
        }

        fn rejecting() -> Arc<Self> {
            Arc::new(Self {
                enqueued: AtomicUsize::new(0),
                reject: true,
            })
        }

        fn enqueue_count(&self) -> usize {
            self.enqueued.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl WorkQueue for RecordingQueue {
        async fn enqueue(&self, _item: WorkItem) -> Result<()> {
            if self.reject {
                return Err(anyhow::anyhow!("queue unavailable"));
            }
            self.enqueued.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn request(address1: Option<&str>, address2: Option<&str>) -> Json<DistanceRequest> {
        Json(DistanceRequest {
            address1: address1.map(String::from),
            address2: address2.map(String::from),
        })
    }

    // ============================================================
    // TEST 1: Valid requests are accepted and enqueued once
    // ============================================================

    #[tokio::test]
    async fn test_valid_request_enqueues_exactly_once() {
        let queue = RecordingQueue::accepting();
        let queue_dyn: Arc<dyn WorkQueue> = queue.clone();

        let (status, Json(response)) = handle_submit_distance(
            Extension(queue_dyn),
            request(Some("Main St 1"), Some("Side St 2")),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(queue.enqueue_count(), 1);

        match response {
            IntakeResponse::Accepted { message, request_id } => {
                assert_eq!(message, "Your request is being processed");
                assert!(uuid::Uuid::parse_str(&request_id.0).is_ok());
            }
            IntakeResponse::Failed { error } => panic!("Unexpected failure: {}", error),
        }
    }

    #[tokio::test]
    async fn test_ids_are_never_repeated() {
        let queue = RecordingQueue::accepting();
        let queue_dyn: Arc<dyn WorkQueue> = queue.clone();

        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            let (_, Json(response)) = handle_submit_distance(
                Extension(queue_dyn.clone()),
                request(Some("A"), Some("B")),
            )
            .await;

            if let IntakeResponse::Accepted { request_id, .. } = response {
                assert!(seen.insert(request_id.0), "Duplicate request id issued");
            } else {
                panic!("Expected acceptance");
            }
        }
    }

    // ============================================================
    // TEST 2: Missing or empty addresses are a 400, no enqueue
    // ============================================================

    #[tokio::test]
    async fn test_missing_address_is_rejected_without_enqueue() {
        let cases = [
            (None, Some("B")),
            (Some("A"), None),
            (None, None),
            (Some(""), Some("B")),
            (Some("A"), Some("")),
        ];

        for (address1, address2) in cases {
            let queue = RecordingQueue::accepting();
            let queue_dyn: Arc<dyn WorkQueue> = queue.clone();

            let (status, Json(response)) =
                handle_submit_distance(Extension(queue_dyn), request(address1, address2)).await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(queue.enqueue_count(), 0, "Invalid input must not enqueue");

            match response {
                IntakeResponse::Failed { error } => {
                    assert_eq!(error, "Both addresses are required");
                }
                IntakeResponse::Accepted { .. } => panic!("Invalid input was accepted"),
            }
        }
    }

    // ============================================================
    // TEST 3: Queue failure surfaces as a server error
    // ============================================================

    #[tokio::test]
    async fn test_queue_failure_is_a_500() {
        let queue = RecordingQueue::rejecting();
        let queue_dyn: Arc<dyn WorkQueue> = queue.clone();

        let (status, Json(response)) =
            handle_submit_distance(Extension(queue_dyn), request(Some("A"), Some("B"))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        match response {
            IntakeResponse::Failed { error } => assert_eq!(error, "Internal server error"),
            IntakeResponse::Accepted { .. } => panic!("Queue failure should not be accepted"),
        }
    }
}
