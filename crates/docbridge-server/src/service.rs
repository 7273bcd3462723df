//! MCP server exposing the documentation tree.
//!
//! The `DocsService` provides four read-only tools:
//! 1. `list_libraries` - List top-level documentation folders
//! 2. `list_files` - List Markdown files in a library
//! 3. `get_file` - Return the content of one file
//! 4. `search_docs` - Case-insensitive search with file and line locations
//!
//! Every tool answers with plain text. Failures are never reported as
//! protocol errors: each tool degrades to a fixed sentinel message instead.

use crate::types::{GetFileParams, ListFilesParams, SearchDocsParams};
use docbridge_core::{DocFile, DocsReader, SearchHit};
use rmcp::handler::server::ServerHandler;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{ErrorData as McpError, tool, tool_handler, tool_router};
use std::sync::Arc;

/// Returned by `list_libraries` when the root holds no libraries.
pub const NO_LIBRARIES: &str = "No libraries found";

/// Returned by `search_docs` when nothing matches.
pub const NOTHING_FOUND: &str = "Nothing found";

/// MCP server for browsing a Markdown documentation tree.
///
/// # Examples
///
/// ```no_run
/// use docbridge_core::DocsReader;
/// use docbridge_server::service::DocsService;
/// use rmcp::ServiceExt;
/// use rmcp::transport::stdio;
///
/// # async fn example() -> anyhow::Result<()> {
/// let service = DocsService::new(DocsReader::from_root("./docs"));
/// service.serve(stdio()).await?.waiting().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DocsService {
    /// Shared, immutable reader
    reader: Arc<DocsReader>,

    /// Tool router for MCP protocol
    tool_router: ToolRouter<Self>,
}

impl DocsService {
    /// Creates a service backed by `reader`.
    #[must_use]
    pub fn new(reader: DocsReader) -> Self {
        Self {
            reader: Arc::new(reader),
            tool_router: Self::tool_router(),
        }
    }

    /// Returns the underlying reader.
    #[must_use]
    pub fn reader(&self) -> &DocsReader {
        &self.reader
    }

    /// Runs a filesystem operation off the async runtime.
    ///
    /// Returns `None` if the blocking task panicked or was cancelled.
    async fn run_blocking<T, F>(&self, operation: &'static str, f: F) -> Option<T>
    where
        F: FnOnce(&DocsReader) -> T + Send + 'static,
        T: Send + 'static,
    {
        let reader = Arc::clone(&self.reader);

        match tokio::task::spawn_blocking(move || f(&reader)).await {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("{operation} task failed: {e}");
                None
            }
        }
    }
}

#[tool_router]
impl DocsService {
    /// List all documentation libraries.
    #[tool(description = "List all available documentation libraries")]
    async fn list_libraries(&self) -> Result<CallToolResult, McpError> {
        let libraries = self
            .run_blocking("list_libraries", DocsReader::list_libraries)
            .await
            .unwrap_or_default();

        tracing::debug!("list_libraries: {} libraries", libraries.len());
        Ok(text_result(format_libraries(&libraries)))
    }

    /// List Markdown files in a library.
    #[tool(description = "List all files in a specific library")]
    async fn list_files(
        &self,
        Parameters(params): Parameters<ListFilesParams>,
    ) -> Result<CallToolResult, McpError> {
        let library = params.library;

        let files = {
            let library = library.clone();
            self.run_blocking("list_files", move |reader| reader.list_files(&library))
                .await
                .unwrap_or_default()
        };

        tracing::debug!("list_files({library}): {} files", files.len());
        Ok(text_result(format_files(&library, &files)))
    }

    /// Return the content of a documentation file.
    #[tool(description = "Get the content of a specific documentation file")]
    async fn get_file(
        &self,
        Parameters(params): Parameters<GetFileParams>,
    ) -> Result<CallToolResult, McpError> {
        let GetFileParams { library, filename } = params;

        let doc = {
            let (library, filename) = (library.clone(), filename.clone());
            self.run_blocking("get_file", move |reader| {
                reader.get_file(&library, &filename)
            })
            .await
            .flatten()
        };

        tracing::debug!("get_file({library}, {filename}): found={}", doc.is_some());
        Ok(text_result(format_file(&library, &filename, doc)))
    }

    /// Search across all libraries or within one.
    #[tool(description = "Search across all docs or within a specific library")]
    async fn search_docs(
        &self,
        Parameters(params): Parameters<SearchDocsParams>,
    ) -> Result<CallToolResult, McpError> {
        let SearchDocsParams { query, library } = params;

        let hits = self
            .run_blocking("search_docs", move |reader| {
                reader.search(&query, library.as_deref())
            })
            .await
            .unwrap_or_default();

        tracing::debug!("search_docs: {} hits", hits.len());
        Ok(text_result(format_hits(&hits)))
    }
}

#[tool_handler]
impl ServerHandler for DocsService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Read-only access to Markdown documentation. Use list_libraries, then \
                 list_files to browse, get_file to read a file, and search_docs to find \
                 lines mentioning a term."
                    .to_string(),
            ),
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Formats library names as a bullet list.
#[must_use]
pub fn format_libraries(libraries: &[String]) -> String {
    if libraries.is_empty() {
        return NO_LIBRARIES.to_string();
    }
    bullet_list(libraries)
}

/// Formats the files of `library` as a bullet list.
#[must_use]
pub fn format_files(library: &str, files: &[String]) -> String {
    if files.is_empty() {
        return format!("Library '{library}' not found or empty");
    }
    bullet_list(files)
}

/// Returns the raw file content, or the not-found message.
#[must_use]
pub fn format_file(library: &str, filename: &str, doc: Option<DocFile>) -> String {
    doc.map_or_else(
        || format!("File '{filename}' not found in '{library}'"),
        |doc| doc.content,
    )
}

/// Formats search hits, one per line.
#[must_use]
pub fn format_hits(hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return NOTHING_FOUND.to_string();
    }

    hits.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn text_result(text: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn create_test_service() -> (TempDir, DocsService) {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "axum/intro.md", "# Axum\nHello world\n");
        write(temp.path(), "axum/guides/routing.md", "Routing basics\n");
        write(temp.path(), "serde/derive.md", "Derive macros\n");

        let service = DocsService::new(DocsReader::from_root(temp.path()));
        (temp, service)
    }

    fn text(result: &CallToolResult) -> String {
        result.content[0].as_text().unwrap().text.clone()
    }

    // ========================================================================
    // Formatting Tests
    // ========================================================================

    #[test]
    fn test_format_libraries() {
        assert_eq!(format_libraries(&[]), "No libraries found");
        assert_eq!(
            format_libraries(&["axum".to_string(), "serde".to_string()]),
            "- axum\n- serde"
        );
    }

    #[test]
    fn test_format_files() {
        assert_eq!(
            format_files("tokio", &[]),
            "Library 'tokio' not found or empty"
        );
        assert_eq!(format_files("axum", &["intro.md".to_string()]), "- intro.md");
    }

    #[test]
    fn test_format_file() {
        assert_eq!(
            format_file("axum", "missing.md", None),
            "File 'missing.md' not found in 'axum'"
        );

        let doc = DocFile {
            name: "intro.md".to_string(),
            path: "/docs/axum/intro.md".into(),
            content: "# Axum\n".to_string(),
        };
        assert_eq!(format_file("axum", "intro.md", Some(doc)), "# Axum\n");
    }

    #[test]
    fn test_format_hits() {
        assert_eq!(format_hits(&[]), "Nothing found");

        let hits = vec![
            SearchHit {
                path: "axum/intro.md".to_string(),
                line: 2,
                text: "Hello world".to_string(),
            },
            SearchHit {
                path: "serde/derive.md".to_string(),
                line: 1,
                text: "hello serde".to_string(),
            },
        ];
        assert_eq!(
            format_hits(&hits),
            "[axum/intro.md] line 2: Hello world\n[serde/derive.md] line 1: hello serde"
        );
    }

    // ========================================================================
    // Tool Tests
    // ========================================================================

    #[tokio::test]
    async fn test_list_libraries_tool() {
        let (_temp, service) = create_test_service();
        let result = service.list_libraries().await.unwrap();
        assert_eq!(text(&result), "- axum\n- serde");
    }

    #[tokio::test]
    async fn test_list_libraries_tool_empty_root() {
        let temp = TempDir::new().unwrap();
        let service = DocsService::new(DocsReader::from_root(temp.path()));

        let result = service.list_libraries().await.unwrap();
        assert_eq!(text(&result), "No libraries found");
    }

    #[tokio::test]
    async fn test_list_files_tool() {
        let (_temp, service) = create_test_service();

        let params = ListFilesParams {
            library: "axum".to_string(),
        };
        let result = service.list_files(Parameters(params)).await.unwrap();
        assert_eq!(text(&result), "- guides/routing.md\n- intro.md");

        let params = ListFilesParams {
            library: "../axum".to_string(),
        };
        let result = service.list_files(Parameters(params)).await.unwrap();
        assert_eq!(text(&result), "Library '../axum' not found or empty");
    }

    #[tokio::test]
    async fn test_get_file_tool() {
        let (_temp, service) = create_test_service();

        let params = GetFileParams {
            library: "axum".to_string(),
            filename: "intro.md".to_string(),
        };
        let result = service.get_file(Parameters(params)).await.unwrap();
        assert_eq!(text(&result), "# Axum\nHello world\n");
    }

    #[tokio::test]
    async fn test_get_file_tool_missing() {
        let (_temp, service) = create_test_service();

        let params = GetFileParams {
            library: "lib".to_string(),
            filename: "missing.md".to_string(),
        };
        let result = service.get_file(Parameters(params)).await.unwrap();
        assert_eq!(text(&result), "File 'missing.md' not found in 'lib'");
    }

    #[tokio::test]
    async fn test_search_docs_tool() {
        let (_temp, service) = create_test_service();

        let params = SearchDocsParams {
            query: "hello".to_string(),
            library: None,
        };
        let result = service.search_docs(Parameters(params)).await.unwrap();
        assert_eq!(text(&result), "[axum/intro.md] line 2: Hello world");
    }

    #[tokio::test]
    async fn test_search_docs_tool_empty_query() {
        let (_temp, service) = create_test_service();

        for library in [None, Some("axum".to_string())] {
            let params = SearchDocsParams {
                query: String::new(),
                library,
            };
            let result = service.search_docs(Parameters(params)).await.unwrap();
            assert_eq!(text(&result), "Nothing found");
        }
    }

    #[tokio::test]
    async fn test_tools_never_fail_on_missing_root() {
        let temp = TempDir::new().unwrap();
        let service = DocsService::new(DocsReader::from_root(temp.path().join("gone")));

        let result = service.list_libraries().await.unwrap();
        assert_eq!(text(&result), "No libraries found");

        let params = SearchDocsParams {
            query: "anything".to_string(),
            library: None,
        };
        let result = service.search_docs(Parameters(params)).await.unwrap();
        assert_eq!(text(&result), "Nothing found");
    }

    // ========================================================================
    // Server Info Tests
    // ========================================================================

    #[test]
    fn test_get_info_enables_tools() {
        let service = DocsService::new(DocsReader::from_root("."));
        let info = service.get_info();

        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.unwrap().contains("search_docs"));
    }

    #[test]
    fn test_tool_router_registers_all_tools() {
        let service = DocsService::new(DocsReader::from_root("."));
        let mut names: Vec<String> = service
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();

        assert_eq!(
            names,
            vec!["get_file", "list_files", "list_libraries", "search_docs"]
        );
    }
}
