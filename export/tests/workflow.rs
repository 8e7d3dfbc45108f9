//! Full export runs against the live mock server.
//!
//! # Design
//! Each test starts the mock server on a random port, points an `AppConfig`
//! at it and at a temporary output directory, and runs the real workflow with
//! the `ureq` transport. Only the viewer launch is replaced, by a recorder.

use std::cell::RefCell;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use mock_server::{Account, Directory};
use wzs_core::WzsServiceClient;
use wzs_export::{AppConfig, ExportError, ResidentExport, ViewerLauncher};

#[derive(Default)]
struct RecordingLauncher {
    launches: RefCell<Vec<(String, PathBuf)>>,
}

impl ViewerLauncher for RecordingLauncher {
    fn launch(&self, program: &str, file: &Path) -> Result<(), ExportError> {
        self.launches
            .borrow_mut()
            .push((program.to_string(), file.to_path_buf()));
        Ok(())
    }
}

fn start_server(directory: Directory) -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run_with(listener, directory).await
        })
        .unwrap();
    });

    addr
}

fn config(addr: SocketAddr, dir: &Path, password: &str) -> AppConfig {
    AppConfig {
        uri: format!("http://{addr}/"),
        filename: "residents.csv".to_string(),
        filepath: dir.join("exports"),
        process_full_name: "viewer".to_string(),
        delimiter: ";".to_string(),
        login: "JD".to_string(),
        domain: "SilverMeadows".to_string(),
        password: password.to_string(),
        application_key: "demo-key".to_string(),
    }
}

fn export<'a>(
    config: AppConfig,
    launcher: &'a RecordingLauncher,
) -> ResidentExport<wzs_core::UreqTransport, &'a RecordingLauncher> {
    let client = WzsServiceClient::new(&config.uri);
    ResidentExport::new(config, client, launcher).unwrap()
}

#[test]
fn exports_active_residents_sorted_by_id() {
    let addr = start_server(Directory::seeded());
    let dir = tempfile::tempdir().unwrap();
    let launcher = RecordingLauncher::default();
    let export = export(config(addr, dir.path(), "secret"), &launcher);

    let summary = export.run().unwrap();
    assert_eq!(summary.residents, 3);
    assert!(summary.file_written);

    let text = fs::read_to_string(export.output_path()).unwrap();
    let lines: Vec<&str> = text.split("\r\n").collect();
    // Three rows, a header and the empty tail after the last CRLF.
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[4], "");

    assert!(lines[0].starts_with("\"ID\";\"Name\";\"FirstName\";\"CallName\";\"BD\";"));
    assert!(lines[0].ends_with(";\"BelraiInformedConsentSince\""));

    assert_eq!(
        lines[1],
        "\"2\";\"Claes\";\"Jozef\";\"Jef, \"\"de smid\"\"\";\"11/30/1928 00:00:00\";\"Mechelen\";\"201\";;\"True\";\"1\";\"3\";\"06/01/2019 10:12:00\";;;\"3000\";\"Leuven\";\"201\";\"Eerste verdieping\";\"2\";\"True\";\"1\";\"Aanwezig\";;;"
    );
    assert!(lines[2].starts_with("\"5\";\"Peeters\";\"Maria\";\"Mieke\";"));
    assert!(lines[2].ends_with(";\"01/01/2020 00:00:00\";"));

    // Empty call name stays empty; padded address is trimmed.
    assert!(lines[3].starts_with("\"9\";\"Janssens\";\"Anna\";;\"07/15/1940 00:00:00\";"));
    assert!(lines[3].contains(";\"Kerkstraat 1\";"));

    assert_eq!(
        launcher.launches.borrow().as_slice(),
        &[("viewer".to_string(), export.output_path().to_path_buf())]
    );
}

#[test]
fn no_active_residents_writes_nothing_but_opens_viewer() {
    let directory = Directory::default().with_account(Account {
        user_id: "JD@SilverMeadows".to_string(),
        password: "secret".to_string(),
        application_key: "demo-key".to_string(),
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        number: 12,
    });
    let addr = start_server(directory);
    let dir = tempfile::tempdir().unwrap();
    let launcher = RecordingLauncher::default();
    let export = export(config(addr, dir.path(), "secret"), &launcher);

    let summary = export.run().unwrap();
    assert_eq!(summary.residents, 0);
    assert!(!summary.file_written);
    assert!(!export.output_path().exists());
    assert_eq!(launcher.launches.borrow().len(), 1);
}

#[test]
fn rejected_login_reports_remote_message() {
    let addr = start_server(Directory::seeded());
    let dir = tempfile::tempdir().unwrap();
    let launcher = RecordingLauncher::default();
    let export = export(config(addr, dir.path(), "wrong"), &launcher);

    let err = export.run().unwrap_err();
    assert_eq!(err.to_string(), "Invalid user or password");
    assert!(!export.output_path().exists());
    assert!(launcher.launches.borrow().is_empty());
}

#[test]
fn multi_character_delimiter_separates_every_field() {
    let addr = start_server(Directory::seeded());
    let dir = tempfile::tempdir().unwrap();
    let launcher = RecordingLauncher::default();
    let mut settings = config(addr, dir.path(), "secret");
    settings.delimiter = "||".to_string();
    let export = export(settings, &launcher);

    export.run().unwrap();
    let text = fs::read_to_string(export.output_path()).unwrap();
    let header = text.split("\r\n").next().unwrap();
    assert!(header.starts_with("\"ID\"||\"Name\"||\"FirstName\"||"));
    assert_eq!(header.matches("||").count(), 24);
}
