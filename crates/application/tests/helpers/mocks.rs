use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone};
use digkit_application::ports::{Clock, PublicIpFetcher};
use digkit_domain::DomainError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

#[derive(Clone)]
enum MockReply {
    Body(String),
    Fail,
    Hang,
}

/// Fetcher with canned bodies per endpoint. Unknown endpoints fail.
pub struct MockPublicIpFetcher {
    replies: Mutex<HashMap<String, MockReply>>,
    calls: AtomicUsize,
    requested: Mutex<Vec<String>>,
}

impl MockPublicIpFetcher {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(HashMap::new()),
            calls: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn with_body(self, endpoint: &str, body: &str) -> Self {
        self.set_body(endpoint, body);
        self
    }

    pub fn with_failure(self, endpoint: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), MockReply::Fail);
        self
    }

    pub fn with_hang(self, endpoint: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), MockReply::Hang);
        self
    }

    pub fn set_body(&self, endpoint: &str, body: &str) {
        self.replies
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), MockReply::Body(body.to_string()));
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl PublicIpFetcher for MockPublicIpFetcher {
    async fn fetch(&self, endpoint: &str, _timeout: Duration) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(endpoint.to_string());

        let reply = self.replies.lock().unwrap().get(endpoint).cloned();
        match reply {
            Some(MockReply::Body(body)) => Ok(body),
            Some(MockReply::Hang) => std::future::pending().await,
            Some(MockReply::Fail) | None => Err(DomainError::PublicIpLookupFailed {
                endpoint: endpoint.to_string(),
                reason: "connection refused".to_string(),
            }),
        }
    }
}

/// Clock frozen at a fixed local time whose monotonic side can be advanced.
pub struct FakeClock {
    local: DateTime<Local>,
    base: Instant,
    offset: Mutex<Duration>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self::at(2024, 5, 17, 13, 45, 30)
    }

    pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        Self {
            local: Local
                .with_ymd_and_hms(year, month, day, hour, min, sec)
                .earliest()
                .unwrap(),
            base: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.offset.lock().unwrap() += by;
    }
}

impl Clock for FakeClock {
    fn local_now(&self) -> DateTime<Local> {
        self.local
    }

    fn instant(&self) -> Instant {
        self.base + *self.offset.lock().unwrap()
    }
}
