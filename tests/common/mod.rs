//! Local HTTP server that answers API paths with JSON fixtures and records
//! what it received.

#![allow(dead_code)]

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use proctorexam::{Client, ClientConfig};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

pub const API_KEY: &str = "test-api-key";
pub const API_SECRET: &str = "test-api-secret";

pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
    pub query_keys: Vec<String>,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

#[derive(Clone)]
struct Route {
    status: u16,
    body: String,
}

struct State {
    routes: HashMap<String, Route>,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
}

#[derive(Default)]
pub struct FixtureServerBuilder {
    routes: HashMap<String, Route>,
}

impl FixtureServerBuilder {
    /// Serve `fixture_name` with status 200 at `path`.
    pub fn fixture(self, path: &str, fixture_name: &str) -> Self {
        self.respond(path, 200, &fixture(fixture_name))
    }

    pub fn respond(mut self, path: &str, status: u16, body: &str) -> Self {
        self.routes.insert(
            path.to_string(),
            Route {
                status,
                body: body.to_string(),
            },
        );
        self
    }

    pub fn start(self) -> FixtureServer {
        let recorded = Arc::new(Mutex::new(Vec::new()));
        let state = web::Data::new(State {
            routes: self.routes,
            recorded: recorded.clone(),
        });

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let system = actix_web::rt::System::new();
            system.block_on(async move {
                let server = HttpServer::new(move || {
                    App::new()
                        .app_data(state.clone())
                        .default_service(web::to(serve))
                })
                .workers(1)
                .disable_signals()
                .bind(("127.0.0.1", 0))
                .expect("bind fixture server");

                let addr = server.addrs()[0];
                let server = server.run();
                tx.send((addr, server.handle()))
                    .expect("report fixture server address");
                server.await.expect("run fixture server");
            });
        });

        let (addr, handle) = rx.recv().expect("fixture server did not start");
        FixtureServer {
            addr,
            handle,
            recorded,
        }
    }
}

async fn serve(req: HttpRequest, body: web::Bytes, state: web::Data<State>) -> HttpResponse {
    let query_keys = url::form_urlencoded::parse(req.query_string().as_bytes())
        .map(|(k, _)| k.into_owned())
        .collect();
    let query = url::form_urlencoded::parse(req.query_string().as_bytes())
        .into_owned()
        .collect();
    let headers = req
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();

    state.recorded.lock().unwrap().push(RecordedRequest {
        method: req.method().to_string(),
        path: req.path().to_string(),
        query,
        query_keys,
        headers,
        body: body.to_vec(),
    });

    match state.routes.get(req.path()) {
        Some(route) => HttpResponse::build(StatusCode::from_u16(route.status).unwrap())
            .content_type("application/json")
            .body(route.body.clone()),
        None => HttpResponse::NotFound()
            .content_type("application/json")
            .body(r#"{"error":"not found"}"#),
    }
}

pub struct FixtureServer {
    addr: SocketAddr,
    handle: ServerHandle,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FixtureServer {
    pub fn builder() -> FixtureServerBuilder {
        FixtureServerBuilder::default()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::new(&self.base_url(), API_KEY, API_SECRET).unwrap()
    }

    pub fn client(&self) -> Client {
        Client::new(self.config()).unwrap()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.recorded.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .pop()
            .expect("fixture server received no requests")
    }
}

impl Drop for FixtureServer {
    fn drop(&mut self) {
        // stop() sends the command eagerly; the returned future only waits
        drop(self.handle.stop(false));
    }
}
