use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::process::{Command, Output};
use std::thread;

fn inspector(base_url: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gql-args-inspector"))
        .args(&["--timeout", "5", base_url])
        .output()
        .expect("the binary runs")
}

/// Reads one request, headers and body, so the client never sees a reset mid-write.
fn read_request(stream: &mut TcpStream) {
    let mut received = Vec::new();
    let mut buf = [0u8; 4096];

    loop {
        let n = match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => n,
        };
        received.extend_from_slice(&buf[..n]);

        let text = String::from_utf8_lossy(&received).into_owned();
        if let Some(end_of_headers) = text.find("\r\n\r\n") {
            let content_length = text[..end_of_headers]
                .lines()
                .filter_map(|line| {
                    let mut parts = line.splitn(2, ':');
                    match (parts.next(), parts.next()) {
                        (Some(name), Some(value))
                            if name.trim().eq_ignore_ascii_case("content-length") =>
                        {
                            value.trim().parse::<usize>().ok()
                        }
                        _ => None,
                    }
                })
                .next()
                .unwrap_or(0);

            if received.len() >= end_of_headers + 4 + content_length {
                return;
            }
        }
    }
}

/// Answers a single request with `status` and a JSON `body`, then closes.
fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            read_request(&mut stream);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).ok();
        }
    });

    base_url
}

fn assert_failed_with(output: &Output, diagnostic: &str) {
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "stdout: {:?}", output.stdout);
    assert!(stderr.starts_with(diagnostic), "stderr: {}", stderr);
}

#[test]
fn reports_go_to_stdout() {
    let base_url = serve_once(
        "200 OK",
        r#"{"data":{"__schema":{"queryType":{"name":"Query"},"types":[{"kind":"OBJECT","name":"Query","fields":[{"name":"user","args":[{"name":"id","type":{"kind":"NON_NULL","name":null,"ofType":{"kind":"SCALAR","name":"ID","ofType":null}}}]},{"name":"ping","args":[]}]}]}}}"#,
    );

    let output = inspector(&base_url);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "
=== Queries that REQUIRE arguments ===
- user: id (required)

=== Queries that DO NOT require arguments ===
- ping
"
    );
}

#[test]
fn unreachable_hosts_exit_with_a_connection_error() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let output = inspector(&format!("http://127.0.0.1:{}", port));

    assert_failed_with(&output, "[!] Connection error: ");
}

#[test]
fn server_errors_exit_with_the_status_code() {
    let base_url = serve_once("500 Internal Server Error", "{}");

    let output = inspector(&base_url);

    assert_failed_with(
        &output,
        &format!("[!] HTTP error 500 at {}/graphql", base_url),
    );
}

#[test]
fn missing_query_types_exit_with_a_schema_shape_error() {
    let base_url = serve_once(
        "200 OK",
        r#"{"data":{"__schema":{"types":[{"kind":"SCALAR","name":"String"}]}}}"#,
    );

    let output = inspector(&base_url);

    assert_failed_with(&output, "[!] Schema shape error: query type `Query` not found");
}

#[test]
fn wrong_argument_counts_exit_with_usage() {
    let output = Command::new(env!("CARGO_BIN_EXE_gql-args-inspector"))
        .output()
        .expect("the binary runs");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("USAGE"));
}
