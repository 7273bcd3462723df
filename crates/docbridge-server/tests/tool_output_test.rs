//! Integration tests for tool text output built from a real documentation tree.

use docbridge_core::DocsReader;
use docbridge_server::DocsService;
use docbridge_server::service::{
    NO_LIBRARIES, NOTHING_FOUND, format_file, format_files, format_hits, format_libraries,
};
use rmcp::handler::server::ServerHandler;
use std::fs;
use tempfile::TempDir;

fn create_docs() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("tokio/runtime")).unwrap();
    fs::write(
        temp.path().join("tokio/runtime/builder.md"),
        "# Builder\nUse Builder::new_multi_thread\n",
    )
    .unwrap();
    fs::write(temp.path().join("tokio/index.md"), "Tokio docs\n").unwrap();
    temp
}

#[test]
fn test_output_for_populated_tree() {
    let temp = create_docs();
    let service = DocsService::new(DocsReader::from_root(temp.path()));
    let reader = service.reader();

    assert_eq!(format_libraries(&reader.list_libraries()), "- tokio");
    assert_eq!(
        format_files("tokio", &reader.list_files("tokio")),
        "- index.md\n- runtime/builder.md"
    );
    assert_eq!(
        format_file(
            "tokio",
            "runtime/builder.md",
            reader.get_file("tokio", "runtime/builder.md")
        ),
        "# Builder\nUse Builder::new_multi_thread\n"
    );
    assert_eq!(
        format_hits(&reader.search("builder", None)),
        "[tokio/runtime/builder.md] line 1: # Builder\n\
         [tokio/runtime/builder.md] line 2: Use Builder::new_multi_thread"
    );
}

#[test]
fn test_output_sentinels() {
    let temp = TempDir::new().unwrap();
    let service = DocsService::new(DocsReader::from_root(temp.path()));
    let reader = service.reader();

    assert_eq!(format_libraries(&reader.list_libraries()), NO_LIBRARIES);
    assert_eq!(
        format_files("../etc", &reader.list_files("../etc")),
        "Library '../etc' not found or empty"
    );
    assert_eq!(
        format_file("lib", "missing.md", reader.get_file("lib", "missing.md")),
        "File 'missing.md' not found in 'lib'"
    );
    assert_eq!(format_hits(&reader.search("", None)), NOTHING_FOUND);
}

#[test]
fn test_server_info_advertises_tools() {
    let temp = create_docs();
    let service = DocsService::new(DocsReader::from_root(temp.path()));

    let info = service.get_info();
    assert!(info.capabilities.tools.is_some());
}
