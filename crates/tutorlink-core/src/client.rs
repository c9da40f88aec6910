//! HTTP client for the tutor directory backend.
//!
//! Binds the core model to the backend endpoints:
//!
//! - `GET /tutors`
//! - `GET /tutors/search?query=&subject=&location=`
//! - `GET /tutor/profile`
//! - `POST /tutor/profile`
//! - `POST /connect`
//!
//! Every call is a single attempt. Failures surface as [`Error::Remote`] with
//! the HTTP status and the backend's message when it sent one.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::models::{TutorId, TutorProfile, TutorProfileSnapshot, TutorRecord};
use crate::search::{search, QueryParams};
use crate::util::{compact_text, sanitize_error};
use crate::wire::{ConnectRequest, WireAck, WireProfile, WireProfileSnapshot, WireTutor};

#[derive(Debug, Clone)]
pub struct DirectoryClient {
    client: reqwest::Client,
    base_url: String,
}

impl DirectoryClient {
    /// Build a client from configuration; the backend URL must be set
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = config
            .api_base_url
            .clone()
            .ok_or_else(|| Error::Config("Directory backend URL is not configured".to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|error| {
                Error::Config(format!(
                    "failed to build directory HTTP client: {}",
                    sanitize_error(&error)
                ))
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full catalog
    pub async fn list_tutors(&self) -> Result<Vec<TutorRecord>> {
        let url = format!("{}/tutors", self.base_url);
        let wire = self.get_json::<Vec<WireTutor>>(&url, "tutor list").await?;
        let catalog = wire.into_iter().map(TutorRecord::from).collect::<Vec<_>>();
        tracing::debug!(count = catalog.len(), "Fetched tutor catalog");
        Ok(catalog)
    }

    /// Run a search on the backend
    ///
    /// The backend may ignore or only re-rank some filters, so the returned
    /// records go through the local filter and sort as well. Results always
    /// match a local search over the same records.
    pub async fn search_tutors(&self, params: &QueryParams) -> Result<Vec<TutorRecord>> {
        let url = search_url(&self.base_url, params);
        let wire = self.get_json::<Vec<WireTutor>>(&url, "tutor search").await?;
        let received = wire.into_iter().map(TutorRecord::from).collect::<Vec<_>>();
        let results = search(&received, params);
        tracing::debug!(
            received = received.len(),
            matched = results.len(),
            "Backend tutor search completed"
        );
        Ok(results)
    }

    /// Fetch the signed-in tutor's stored profile; `None` when there is none yet
    pub async fn fetch_profile(&self) -> Result<Option<TutorProfileSnapshot>> {
        let url = format!("{}/tutor/profile", self.base_url);
        let wire = self
            .get_json::<WireProfileSnapshot>(&url, "profile lookup")
            .await?;
        if wire.is_empty() {
            tracing::debug!("Backend has no stored profile");
            return Ok(None);
        }
        Ok(Some(TutorProfileSnapshot::from(wire)))
    }

    /// Create or replace the signed-in tutor's profile
    pub async fn submit_profile(&self, profile: &TutorProfile) -> Result<()> {
        let url = format!("{}/tutor/profile", self.base_url);
        self.post_ack(&url, &WireProfile::from(profile), "profile update")
            .await?;
        tracing::info!(subject = %profile.subject, "Submitted tutor profile");
        Ok(())
    }

    /// Record that the student reached out to a tutor
    pub async fn connect(&self, tutor_id: &TutorId) -> Result<()> {
        let url = format!("{}/connect", self.base_url);
        self.post_ack(&url, &ConnectRequest::new(tutor_id), "connect")
            .await?;
        tracing::info!(tutor = %tutor_id, "Recorded tutor connection");
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, what: &str) -> Result<T> {
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|error| {
                Error::remote(format!("{what} request failed: {}", sanitize_error(&error)))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|error| {
            Error::remote(format!(
                "failed to read {what} response: {}",
                sanitize_error(&error)
            ))
        })?;

        if !status.is_success() {
            return Err(http_failure(what, status.as_u16(), &body));
        }

        serde_json::from_str::<T>(&body).map_err(|error| {
            Error::remote(format!("{what} response parse failed: {error}"))
        })
    }

    async fn post_ack<B: Serialize + Sync>(&self, url: &str, body: &B, what: &str) -> Result<()> {
        tracing::debug!(%url, "POST");
        let response = self
            .client
            .post(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|error| {
                Error::remote(format!("{what} request failed: {}", sanitize_error(&error)))
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|error| {
            Error::remote(format!(
                "failed to read {what} response: {}",
                sanitize_error(&error)
            ))
        })?;

        if !status.is_success() {
            return Err(http_failure(what, status.as_u16(), &text));
        }

        if text.trim().is_empty() {
            return Ok(());
        }
        let ack = serde_json::from_str::<WireAck>(&text).map_err(|error| {
            tracing::debug!(body = %compact_text(&text), "Unparsable acknowledgement");
            Error::remote(format!("{what} response parse failed: {error}"))
        })?;
        match ack.failure_message() {
            Some(message) => Err(Error::remote(format!("{what} rejected: {message}"))),
            None => Ok(()),
        }
    }
}

/// `GET /tutors/search` URL with every filter parameter present (empty when unset)
pub fn search_url(base_url: &str, params: &QueryParams) -> String {
    let encode = |value: Option<&String>| {
        urlencoding::encode(value.map_or("", String::as_str)).into_owned()
    };
    format!(
        "{}/tutors/search?query={}&subject={}&location={}",
        base_url.trim_end_matches('/'),
        encode(params.free_text.as_ref()),
        encode(params.subject_filter.as_ref()),
        encode(params.location_filter.as_ref()),
    )
}

fn http_failure(what: &str, status: u16, body: &str) -> Error {
    let message = serde_json::from_str::<WireAck>(body)
        .ok()
        .and_then(|ack| ack.failure_message())
        .unwrap_or_else(|| compact_text(body));
    Error::remote(format!("{what} failed with HTTP {status}: {message}"))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::sync::oneshot;

    use super::*;
    use crate::search::SortKey;

    /// Serve one canned response and hand back the raw request that was received.
    async fn spawn_one_shot_server(
        status_line: &str,
        body: &str,
    ) -> (String, oneshot::Receiver<String>) {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test server");
        let address = listener.local_addr().expect("local address");
        let body = body.to_string();
        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        let (sender, receiver) = oneshot::channel();

        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let request = read_request(&mut socket).await;
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = sender.send(request);
            }
        });

        (format!("http://{address}"), receiver)
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut raw = Vec::new();
        let mut chunk = [0_u8; 1024];
        loop {
            let Ok(read) = socket.read(&mut chunk).await else {
                break;
            };
            if read == 0 {
                break;
            }
            raw.extend_from_slice(&chunk[..read]);

            let text = String::from_utf8_lossy(&raw);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if raw.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&raw).into_owned()
    }

    fn client_for(base_url: &str) -> DirectoryClient {
        let config = ClientConfig {
            api_base_url: Some(base_url.to_string()),
            request_timeout: Duration::from_secs(5),
            ..ClientConfig::default()
        };
        DirectoryClient::new(&config).expect("client")
    }

    const TUTORS_BODY: &str = r#"[
        {"id": 1, "name": "Prof. David Lee", "subject": "Physics", "price_per_hour": 40.0,
         "availability": "Mon-Fri", "whatsapp_number": "+1234567891", "location": "Boston, MA",
         "bio": null, "rating": 4.8, "total_sessions": 89},
        {"id": 2, "name": "Maria Garcia", "subject": "English Literature", "price_per_hour": 30.0,
         "availability": "Tue-Thu", "whatsapp_number": "+1234567892", "location": "Los Angeles, CA",
         "bio": "Essay writing", "rating": 4.7, "total_sessions": 156}
    ]"#;

    #[test]
    fn new_requires_backend_url() {
        let error = DirectoryClient::new(&ClientConfig::default()).unwrap_err();
        assert!(matches!(error, Error::Config(_)));
    }

    #[test]
    fn search_url_includes_all_parameters() {
        let params = QueryParams::new()
            .with_free_text("quantum physics")
            .with_location("Boston, MA");
        assert_eq!(
            search_url("https://api.example.com/", &params),
            "https://api.example.com/tutors/search?query=quantum%20physics&subject=&location=Boston%2C%20MA"
        );
    }

    #[tokio::test]
    async fn list_tutors_translates_wire_records() {
        let (base_url, request) = spawn_one_shot_server("200 OK", TUTORS_BODY).await;
        let tutors = client_for(&base_url).list_tutors().await.unwrap();

        assert_eq!(tutors.len(), 2);
        assert_eq!(tutors[0].id.as_str(), "1");
        assert_eq!(tutors[0].contact_handle, "+1234567891");
        assert_eq!(tutors[0].bio, "");

        let request = request.await.unwrap();
        assert!(request.starts_with("GET /tutors HTTP/1.1"));
    }

    #[tokio::test]
    async fn search_tutors_sorts_backend_results_locally() {
        let (base_url, request) = spawn_one_shot_server("200 OK", TUTORS_BODY).await;
        let params = QueryParams::new()
            .with_subject("i")
            .sorted_by(SortKey::PriceLow);
        let tutors = client_for(&base_url).search_tutors(&params).await.unwrap();

        let names = tutors.iter().map(|t| t.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Maria Garcia", "Prof. David Lee"]);

        let request = request.await.unwrap();
        assert!(request.starts_with("GET /tutors/search?query=&subject=i&location= HTTP/1.1"));
    }

    #[tokio::test]
    async fn search_tutors_drops_records_the_backend_did_not_filter() {
        let body = r#"[
            {"id": 1, "name": "Dr. Emily Brown", "subject": "Mathematics", "price_per_hour": 35.0,
             "whatsapp_number": "+1234567890", "location": "New York, NY", "bio": "PhD"},
            {"id": 4, "name": "Dr. James Chen", "subject": "Computer Science", "price_per_hour": 45.0,
             "whatsapp_number": "+1234567893", "location": "San Francisco, CA", "bio": "algorithms"}
        ]"#;
        let (base_url, _request) = spawn_one_shot_server("200 OK", body).await;
        let params = QueryParams::new().with_free_text("algorithms");
        let tutors = client_for(&base_url).search_tutors(&params).await.unwrap();

        let names = tutors.iter().map(|t| t.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Dr. James Chen"]);
    }

    #[tokio::test]
    async fn fetch_profile_reads_server_stats() {
        let body = r#"{"subject": "Physics", "price_per_hour": 40.0, "availability": "Mon-Fri",
            "whatsapp_number": "+1234567891", "location": "Boston, MA", "bio": null,
            "rating": 4.8, "total_sessions": 89}"#;
        let (base_url, request) = spawn_one_shot_server("200 OK", body).await;
        let snapshot = client_for(&base_url)
            .fetch_profile()
            .await
            .unwrap()
            .expect("stored profile");

        assert_eq!(snapshot.profile.subject, "Physics");
        assert_eq!(snapshot.stats().this_month_sessions, 26);
        assert!((snapshot.stats().total_earnings - 3560.0).abs() < f64::EPSILON);

        let request = request.await.unwrap();
        assert!(request.starts_with("GET /tutor/profile HTTP/1.1"));
    }

    #[tokio::test]
    async fn fetch_profile_returns_none_for_empty_object() {
        let (base_url, _request) = spawn_one_shot_server("200 OK", "{}").await;
        let snapshot = client_for(&base_url).fetch_profile().await.unwrap();
        assert_eq!(snapshot, None);
    }

    #[tokio::test]
    async fn connect_rejects_non_json_success_body() {
        let (base_url, _request) = spawn_one_shot_server("200 OK", "<html>ok</html>").await;
        let error = client_for(&base_url)
            .connect(&TutorId::new("4"))
            .await
            .unwrap_err();
        assert!(matches!(error, Error::Remote(_)));
        assert!(error.to_string().contains("connect response parse failed"));
    }

    #[tokio::test]
    async fn list_tutors_surfaces_http_failure() {
        let (base_url, _request) =
            spawn_one_shot_server("500 Internal Server Error", "{\"error\":\"boom\"}").await;
        let error = client_for(&base_url).list_tutors().await.unwrap_err();
        let message = error.to_string();
        assert!(message.contains("HTTP 500"));
        assert!(message.contains("boom"));
    }

    #[tokio::test]
    async fn submit_profile_posts_snake_case_body() {
        let (base_url, request) = spawn_one_shot_server("200 OK", "{\"success\":true}").await;
        let profile = TutorProfile {
            subject: "Physics".to_string(),
            price_per_hour: 40.0,
            availability: "Mon-Fri".to_string(),
            contact_handle: "+1234567891".to_string(),
            location: "Boston, MA".to_string(),
            bio: String::new(),
        };
        client_for(&base_url).submit_profile(&profile).await.unwrap();

        let request = request.await.unwrap();
        assert!(request.starts_with("POST /tutor/profile HTTP/1.1"));
        assert!(request.contains("\"whatsapp_number\":\"+1234567891\""));
        assert!(!request.contains("total_sessions"));
    }

    #[tokio::test]
    async fn connect_surfaces_rejection_message() {
        let (base_url, request) = spawn_one_shot_server(
            "400 Bad Request",
            "{\"error\":\"Connection already exists\"}",
        )
        .await;
        let error = client_for(&base_url)
            .connect(&TutorId::new("4"))
            .await
            .unwrap_err();
        assert!(error.to_string().contains("Connection already exists"));

        let request = request.await.unwrap();
        assert!(request.starts_with("POST /connect HTTP/1.1"));
        assert!(request.contains("\"tutor_id\":4"));
    }

    #[tokio::test]
    async fn connect_treats_success_false_as_failure() {
        let (base_url, _request) = spawn_one_shot_server(
            "200 OK",
            "{\"success\":false,\"message\":\"Unauthorized\"}",
        )
        .await;
        let error = client_for(&base_url)
            .connect(&TutorId::new("4"))
            .await
            .unwrap_err();
        assert!(error.to_string().contains("connect rejected: Unauthorized"));
    }
}
