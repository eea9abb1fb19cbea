//! Word ranking service
//!
//! Reads a text file, counts qualifying words, builds the AVL tree from the
//! aggregated counts and ranks the in-order traversal.
//!
//! ```text
//! file ──split_whitespace──▶ FrequencyCounter ──▶ WordTree ──in_order──▶ rank(k)
//! ```

use std::io::BufRead;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{
    clamp_k, rank, FrequencyCounter, FrequencyMap, WordCount, WordTree, MIN_WORD_LEN,
};
use crate::infrastructure::traits::{FileSystem, StatusReporter};

/// Pipeline from a text file to its top-K words.
pub struct WordRankService {
    fs: Arc<dyn FileSystem>,
    status: Arc<dyn StatusReporter>,
    min_len: usize,
}

impl WordRankService {
    /// Create a new service with the default minimum word length.
    pub fn new(fs: Arc<dyn FileSystem>, status: Arc<dyn StatusReporter>) -> Self {
        Self {
            fs,
            status,
            min_len: MIN_WORD_LEN,
        }
    }

    /// Override the minimum qualifying word length.
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    /// Count qualifying words of `path`.
    ///
    /// The file handle is released before this returns, on success and on read failure.
    #[instrument(level = "debug", skip(self))]
    pub fn count_file(&self, path: &Path) -> ApplicationResult<FrequencyMap> {
        self.status
            .info(&format!("Opening file '{}'...", path.display()));
        let reader = match self.fs.open(path).open_context(path) {
            Ok(reader) => reader,
            Err(e) => {
                self.status
                    .error(&format!("Failed to open file '{}'!", path.display()));
                return Err(e);
            }
        };

        self.status.info("Reading file...");
        let counts = self.count_tokens(reader, path)?;

        self.status
            .info("File read successfully. Building AVL tree...");
        self.status
            .info(&format!("File '{}' closed.", path.display()));
        debug!("count_file: {} distinct words", counts.len());
        Ok(counts)
    }

    /// Consumes the reader, so the handle is closed when this returns.
    fn count_tokens(
        &self,
        mut reader: Box<dyn BufRead>,
        path: &Path,
    ) -> ApplicationResult<FrequencyMap> {
        let mut counter = FrequencyCounter::new(self.min_len);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = reader.read_until(b'\n', &mut buf).read_context(path)?;
            if read == 0 {
                break;
            }
            // invalid UTF-8 becomes U+FFFD, which normalization drops
            counter.extend(String::from_utf8_lossy(&buf).split_whitespace());
        }
        Ok(counter.into_map())
    }

    /// Build the word tree for `path`.
    #[instrument(level = "debug", skip(self))]
    pub fn build_tree(&self, path: &Path) -> ApplicationResult<WordTree> {
        let counts = self.count_file(path)?;
        let tree = WordTree::from_frequencies(counts);
        debug!(
            "build_tree: {} nodes, height {}",
            tree.len(),
            tree.height()
        );
        Ok(tree)
    }

    /// The `k` most frequent words of `path`, by descending count then ascending word.
    ///
    /// `k <= 0` yields an empty list; `k` beyond the number of distinct words yields all.
    #[instrument(level = "debug", skip(self))]
    pub fn top_words(&self, path: &Path, k: i64) -> ApplicationResult<Vec<WordCount>> {
        let tree = self.build_tree(path)?;
        let ranked = rank(tree.in_order().cloned(), clamp_k(k));
        self.status.info(&format!(
            "Successfully retrieved the top {} most frequent words.",
            k
        ));
        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::util::testing::{init_test_setup, InMemoryFileSystem, RecordingReporter};
    use std::io::{self, BufReader, Cursor, Read};
    use std::path::PathBuf;

    /// Yields its content, then fails every further read.
    struct FailingReader {
        content: Cursor<Vec<u8>>,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.content.read(buf)? {
                0 => Err(io::Error::new(io::ErrorKind::Other, "device went away")),
                n => Ok(n),
            }
        }
    }

    /// Opens every path successfully, but the reader breaks after the first line.
    struct BrokenReadFileSystem;

    impl FileSystem for BrokenReadFileSystem {
        fn open(&self, _path: &Path) -> io::Result<Box<dyn BufRead>> {
            Ok(Box::new(BufReader::new(FailingReader {
                content: Cursor::new(b"alpha beta\n".to_vec()),
            })))
        }

        fn write(&self, _path: &Path, _content: &str) -> io::Result<()> {
            Ok(())
        }

        fn exists(&self, _path: &Path) -> bool {
            true
        }

        fn create_dir_all(&self, _path: &Path) -> io::Result<()> {
            Ok(())
        }
    }

    fn service_with(fs: InMemoryFileSystem) -> (WordRankService, Arc<RecordingReporter>) {
        init_test_setup();
        let reporter = Arc::new(RecordingReporter::default());
        (
            WordRankService::new(Arc::new(fs), reporter.clone()),
            reporter,
        )
    }

    fn service(name: &str, content: &[u8]) -> (WordRankService, Arc<RecordingReporter>) {
        let fs = InMemoryFileSystem::new();
        fs.add_file(name, content);
        service_with(fs)
    }

    #[test]
    fn given_repeated_words_when_ranking_then_returns_top_k() {
        let (svc, _) = service("a.txt", b"The the THE cat cat dog");
        let top = svc.top_words(Path::new("a.txt"), 2).unwrap();
        assert_eq!(
            top,
            vec![WordCount::new("the", 3), WordCount::new("cat", 2)]
        );
    }

    #[test]
    fn given_words_split_across_lines_when_counting_then_all_counted() {
        let (svc, _) = service("a.txt", b"cat\tdog\n\ncat\r\n  dog dog\n");
        let counts = svc.count_file(Path::new("a.txt")).unwrap();
        assert_eq!(counts.get("cat"), Some(&2));
        assert_eq!(counts.get("dog"), Some(&3));
    }

    #[test]
    fn given_invalid_utf8_when_counting_then_bytes_are_dropped() {
        let (svc, _) = service("a.txt", b"ca\xfft cat\n");
        let counts = svc.count_file(Path::new("a.txt")).unwrap();
        assert_eq!(counts.get("cat"), Some(&2));
    }

    #[test]
    fn given_missing_file_when_ranking_then_file_open_error_and_diagnostic() {
        let (svc, reporter) = service_with(InMemoryFileSystem::new());
        let err = svc.top_words(Path::new("missing.txt"), 3).unwrap_err();

        match err {
            ApplicationError::FileOpen { path, .. } => {
                assert_eq!(path, PathBuf::from("missing.txt"))
            }
            other => panic!("expected FileOpen, got {other:?}"),
        }
        assert_eq!(reporter.errors(), vec!["Failed to open file 'missing.txt'!"]);
        assert_eq!(reporter.infos(), vec!["Opening file 'missing.txt'..."]);
    }

    #[test]
    fn given_read_failure_after_open_when_ranking_then_file_read_error() {
        init_test_setup();
        let reporter = Arc::new(RecordingReporter::default());
        let svc = WordRankService::new(Arc::new(BrokenReadFileSystem), reporter.clone());

        let err = svc.top_words(Path::new("x.txt"), 3).unwrap_err();

        match err {
            ApplicationError::FileRead { path, .. } => assert_eq!(path, PathBuf::from("x.txt")),
            other => panic!("expected FileRead, got {other:?}"),
        }
        assert_eq!(
            reporter.infos(),
            vec!["Opening file 'x.txt'...", "Reading file..."]
        );
        assert!(!reporter.infos().iter().any(|m| m.contains("closed")));
        assert!(reporter.errors().is_empty());
    }

    #[test]
    fn given_successful_run_when_ranking_then_status_messages_in_order() {
        let (svc, reporter) = service("a.txt", b"alpha beta");
        svc.top_words(Path::new("a.txt"), 5).unwrap();

        assert_eq!(
            reporter.infos(),
            vec![
                "Opening file 'a.txt'...",
                "Reading file...",
                "File read successfully. Building AVL tree...",
                "File 'a.txt' closed.",
                "Successfully retrieved the top 5 most frequent words.",
            ]
        );
        assert!(reporter.errors().is_empty());
    }

    #[test]
    fn given_custom_min_len_when_ranking_then_shorter_words_dropped() {
        let (svc, _) = service("a.txt", b"cat cat horse");
        let svc = svc.with_min_len(4);
        let top = svc.top_words(Path::new("a.txt"), 10).unwrap();
        assert_eq!(top, vec![WordCount::new("horse", 1)]);
    }

    #[test]
    fn given_file_when_building_tree_then_tree_is_valid() {
        let (svc, _) = service("a.txt", b"one two three four five six seven eight nine ten");
        let tree = svc.build_tree(Path::new("a.txt")).unwrap();
        assert_eq!(tree.len(), 10);
        tree.verify().unwrap();
    }
}
