use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// Runs `f` with a thread-local subscriber at `level` and returns what it logged.
pub(crate) fn capture_logs(level: Level, f: impl FnOnce()) -> String {
    let sink = LogSink::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(sink.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    sink.contents()
}

#[derive(Clone, Default)]
struct LogSink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogSink {
    fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap();
        String::from_utf8_lossy(&buffer).to_string()
    }
}

struct LogSinkWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for LogSinkWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogSink {
    type Writer = LogSinkWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogSinkWriter {
            buffer: Arc::clone(&self.buffer),
        }
    }
}
