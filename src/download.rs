//! Fetching TLE files over HTTP and storing them as-is.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use log::{debug, info};
use reqwest::blocking::Client;
use tempfile::NamedTempFile;

use crate::{Error, Result};

/// Celestrak GP query for the Galileo constellation, TLE format.
pub const GALILEO_TLE_URL: &str = "https://celestrak.org/NORAD/elements/gp.php?GROUP=galileo&FORMAT=tle";

/// Single GET of `url`, body returned as text. Any non-2xx status is an error.
pub fn fetch_tle_text(url: &str, timeout: Duration) -> Result<String> {
    let client = Client::builder().timeout(timeout).build()?;
    fetch_with(&client, url)
}

fn fetch_with(client: &Client, url: &str) -> Result<String> {
    info!("fetching {}", url);
    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    let text = response.text()?;
    debug!("received {} bytes from {}", text.len(), url);
    Ok(text)
}

/// Writes `text` to `path` untouched. Goes through a temporary file in the
/// same directory so an interrupted write never leaves a truncated file at
/// `path`. The temporary file is removed when anything fails.
pub fn save_tle_text<P: AsRef<Path>>(text: &str, path: P) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent)?;
            parent
        }
        None => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(text.as_bytes())?;
    file.flush()?;
    file.persist(path).map_err(|e| Error::Io(e.error))?;
    Ok(())
}

/// Fetches `url` and saves the body to `path`. Returns the number of bytes written.
pub fn download_tle<P: AsRef<Path>>(url: &str, path: P, timeout: Duration) -> Result<usize> {
    let client = Client::builder().timeout(timeout).build()?;
    download_with(&client, url, path)
}

fn download_with<P: AsRef<Path>>(client: &Client, url: &str, path: P) -> Result<usize> {
    let text = fetch_with(client, url)?;
    save_tle_text(&text, path.as_ref())?;
    info!("saved {} bytes to {}", text.len(), path.as_ref().display());
    Ok(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use std::net::TcpListener;
    use std::thread;

    const BODY: &str = "GSAT0101 (GALILEO-PFM)
1 37846U 11060A   24247.73900373 -.00000105  00000+0  00000+0 0  9992
2 37846  57.1274 359.4123 0001042  74.3951 285.6259  1.70476006 80016
";

    /// Serves one canned HTTP response on localhost and returns its URL.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "{}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        });
        format!("http://{}/NORAD/elements/gp.php?GROUP=galileo&FORMAT=tle", addr)
    }

    /// Client that ignores proxies from the environment, to reach the local listener.
    fn local_client() -> Client {
        Client::builder()
            .timeout(Duration::from_secs(5))
            .no_proxy()
            .build()
            .unwrap()
    }

    fn dir_entries(dir: &Path) -> usize {
        fs::read_dir(dir).unwrap().count()
    }

    #[test]
    fn test_download_tle() {
        let url = serve_once("HTTP/1.1 200 OK", BODY);
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        let path = nested.join("galileo.txt");
        let written = download_with(&local_client(), &url, &path).unwrap();
        assert_eq!(written, BODY.len());
        assert_eq!(fs::read_to_string(&path).unwrap(), BODY);
        assert_eq!(dir_entries(&nested), 1);
    }

    #[test]
    fn test_http_error_status() {
        let url = serve_once("HTTP/1.1 404 Not Found", "not found");
        let result = fetch_with(&local_client(), &url);
        assert!(matches!(result, Err(Error::HttpStatus { status: 404, .. })));
    }

    #[test]
    fn test_save_to_tmp_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("galileo.tmp");
        save_tle_text(BODY, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), BODY);
        assert_eq!(dir_entries(dir.path()), 1);
    }

    #[test]
    fn test_failed_save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("galileo.txt");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("occupied"), "x").unwrap();
        assert!(matches!(save_tle_text(BODY, &target), Err(Error::Io(_))));
        assert_eq!(dir_entries(dir.path()), 1);
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("galileo.txt");
        save_tle_text("old", &path).unwrap();
        save_tle_text(BODY, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), BODY);
    }
}
