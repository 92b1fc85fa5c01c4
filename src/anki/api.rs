use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;

use super::types::{
    ApiRequest,
    ApiResponse,
    Note,
};
use crate::core::{
    NoteId,
    ReigoError,
};

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8765";

/// The three AnkiConnect actions the example miner needs.
pub trait StoreClient {
    fn find_notes(&self, query: &str) -> Result<Vec<NoteId>, ReigoError>;

    fn notes_info(&self, note_ids: &[NoteId]) -> Result<Vec<Note>, ReigoError>;

    fn update_note_field(&self, note_id: NoteId, field: &str, value: &str)
        -> Result<(), ReigoError>;
}

pub struct AnkiConnect {
    client: Client,
    endpoint: String,
}

impl AnkiConnect {
    pub fn new(endpoint: &str) -> Result<Self, ReigoError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| ReigoError::Config(format!("HTTP client build failed: {e}")))?;
        Ok(Self { client, endpoint: endpoint.to_string() })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn make_request<T: for<'de> Deserialize<'de>>(
        &self,
        action: &str,
        params: serde_json::Value,
    ) -> Result<Option<T>, ReigoError> {
        log::debug!("AnkiConnect {} {}", action, params);

        let response =
            self.client.post(&self.endpoint).json(&ApiRequest::new(action, params)).send()?;
        if !response.status().is_success() {
            return Err(ReigoError::HttpStatus {
                status: response.status().as_u16(),
                action: action.to_string(),
            });
        }

        let body: ApiResponse<T> = response.json()?;
        body.into_result(action)
    }
}

impl StoreClient for AnkiConnect {
    fn find_notes(&self, query: &str) -> Result<Vec<NoteId>, ReigoError> {
        let params = serde_json::json!({ "query": query });
        Ok(self.make_request("findNotes", params)?.unwrap_or_default())
    }

    fn notes_info(&self, note_ids: &[NoteId]) -> Result<Vec<Note>, ReigoError> {
        let params = serde_json::json!({ "notes": note_ids });
        self.make_request("notesInfo", params)?
            .ok_or_else(|| ReigoError::MissingResult { action: "notesInfo".to_string() })
    }

    fn update_note_field(
        &self,
        note_id: NoteId,
        field: &str,
        value: &str,
    ) -> Result<(), ReigoError> {
        let params = serde_json::json!({
            "note": {
                "id": note_id,
                "fields": { field: value },
            }
        });
        // updateNoteFields answers with a null result on success
        self.make_request::<serde_json::Value>("updateNoteFields", params)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io::{
            BufRead,
            BufReader,
            Read,
            Write,
        },
        net::TcpListener,
        thread,
    };

    use super::*;

    /// Answers a single request with `status` and `body`, returning the client's endpoint.
    fn serve_once(status: &'static str, body: &'static str) -> (String, thread::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let endpoint = format!("http://{}", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);

            let mut content_length = 0;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                let line = line.trim_end();
                if line.is_empty() {
                    break;
                }
                if let Some((name, value)) = line.split_once(':') {
                    if name.eq_ignore_ascii_case("content-length") {
                        content_length = value.trim().parse().unwrap();
                    }
                }
            }
            let mut request_body = vec![0; content_length];
            reader.read_exact(&mut request_body).unwrap();

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let mut stream = reader.into_inner();
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
        });

        (endpoint, handle)
    }

    #[test]
    fn test_non_success_status_is_fatal() {
        let (endpoint, handle) = serve_once("500 Internal Server Error", "");
        let client = AnkiConnect::new(&endpoint).unwrap();

        match client.find_notes("\"deck:RTK\"") {
            Err(ReigoError::HttpStatus { status, action }) => {
                assert_eq!(status, 500);
                assert_eq!(action, "findNotes");
            }
            other => panic!("Expected HttpStatus, got {:?}", other),
        }
        handle.join().unwrap();
    }

    #[test]
    fn test_null_find_result_means_no_notes() {
        let (endpoint, handle) = serve_once("200 OK", r#"{"result": null, "error": null}"#);
        let client = AnkiConnect::new(&endpoint).unwrap();

        assert!(client.find_notes("\"deck:RTK\"").unwrap().is_empty());
        handle.join().unwrap();
    }

    #[test]
    fn test_null_notes_info_result_is_fatal() {
        let (endpoint, handle) = serve_once("200 OK", r#"{"result": null, "error": null}"#);
        let client = AnkiConnect::new(&endpoint).unwrap();

        match client.notes_info(&[1]) {
            Err(ReigoError::MissingResult { action }) => assert_eq!(action, "notesInfo"),
            other => panic!("Expected MissingResult, got {:?}", other),
        }
        handle.join().unwrap();
    }

    #[test]
    fn test_error_body_is_fatal() {
        let (endpoint, handle) =
            serve_once("200 OK", r#"{"result": null, "error": "deck was not found"}"#);
        let client = AnkiConnect::new(&endpoint).unwrap();

        match client.update_note_field(1, "Example Word", "勉■[べんきょう]") {
            Err(ReigoError::Api { action, message }) => {
                assert_eq!(action, "updateNoteFields");
                assert_eq!(message, "deck was not found");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
        handle.join().unwrap();
    }

    #[test]
    fn test_notes_info_parses_notes() {
        let (endpoint, handle) = serve_once(
            "200 OK",
            r#"{"result": [{"noteId": 42, "fields": {"Character": {"value": "強", "order": 0}}}], "error": null}"#,
        );
        let client = AnkiConnect::new(&endpoint).unwrap();

        let notes = client.notes_info(&[42]).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].field("Character").unwrap(), "強");
        handle.join().unwrap();
    }
}
