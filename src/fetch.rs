use errors::InspectError;
use futures::future::Either;
use futures::{Future, Stream};
use hyper::header::ContentType;
use hyper::{Client, Method, Request, Uri};
use hyper_tls::HttpsConnector;
use serde_json as json;
use std::time::Duration;
use tokio_core::reactor::{Core, Timeout};

/// The full introspection document. Type references are unrolled six `ofType` levels deep.
pub const INTROSPECTION_QUERY: &str = include_str!("introspection_query.graphql");

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const DNS_WORKER_THREADS: usize = 1;

/// Sends the introspection query to `<base_url>/graphql`, once, and hands back the JSON it got.
#[derive(Debug, Clone)]
pub struct SchemaFetcher {
    timeout: Duration,
}

impl Default for SchemaFetcher {
    fn default() -> Self {
        SchemaFetcher::new()
    }
}

impl SchemaFetcher {
    pub fn new() -> SchemaFetcher {
        SchemaFetcher::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> SchemaFetcher {
        SchemaFetcher { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Blocks until the target answers, fails, or the timeout elapses. There are no retries.
    ///
    /// The body is returned as parsed, without checking that it looks like an introspection
    /// response.
    pub fn fetch(&self, base_url: &str) -> Result<json::Value, InspectError> {
        let url = graphql_endpoint(base_url);
        let uri = url.parse::<Uri>().map_err(InspectError::connection)?;

        let mut core = Core::new()?;
        let handle = core.handle();
        let connector =
            HttpsConnector::new(DNS_WORKER_THREADS, &handle).map_err(InspectError::connection)?;
        let client = Client::configure().connector(connector).build(&handle);

        let mut request = Request::new(Method::Post, uri);
        request.headers_mut().set(ContentType::json());
        request.set_body(request_body());

        info!("sending the introspection query to {}", url);

        let exchange = client.request(request).and_then(|response| {
            let status = response.status();
            response.body().concat2().map(move |body| (status, body))
        });
        let timeout = Timeout::new(self.timeout, &handle)?;

        let (status, body) = match core.run(exchange.select2(timeout)) {
            Ok(Either::A((exchange, _))) => exchange,
            Ok(Either::B(_)) => {
                return Err(InspectError::connection(format!(
                    "no response from {} within {:?}",
                    url,
                    self.timeout
                )))
            }
            Err(Either::A((err, _))) => return Err(err.into()),
            Err(Either::B((err, _))) => return Err(err.into()),
        };

        if !status.is_success() {
            return Err(InspectError::Http {
                status_code: status.as_u16(),
                url,
            });
        }

        debug!("received {} bytes from {}", body.len(), url);

        json::from_slice(&body).map_err(|err| {
            InspectError::schema_shape(format!("the response is not valid JSON ({})", err))
        })
    }
}

/// `http://host:4000/` and `http://host:4000` both give `http://host:4000/graphql`.
pub fn graphql_endpoint(base_url: &str) -> String {
    format!("{}/graphql", base_url.trim_end_matches('/'))
}

fn request_body() -> String {
    json!({ "query": INTROSPECTION_QUERY }).to_string()
}
