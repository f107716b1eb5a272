use std::io::{self, Write};

pub fn write_stdout_text(text: &str) -> io::Result<()> {
    write_text(&mut io::stdout().lock(), text)
}

pub fn write_stdout_line(text: &str) -> io::Result<()> {
    write_line(&mut io::stdout().lock(), text)
}

/// Writes and flushes, treating a closed reader (`| head`) as success.
pub fn write_text(writer: &mut dyn Write, text: &str) -> io::Result<()> {
    tolerate_broken_pipe(writer.write_all(text.as_bytes()))?;
    tolerate_broken_pipe(writer.flush())
}

pub fn write_line(writer: &mut dyn Write, text: &str) -> io::Result<()> {
    tolerate_broken_pipe(writer.write_all(text.as_bytes()))?;
    tolerate_broken_pipe(writer.write_all(b"\n"))?;
    tolerate_broken_pipe(writer.flush())
}

fn tolerate_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use super::{write_line, write_text};

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    struct Full;

    impl Write for Full {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::StorageFull))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn broken_pipe_is_not_an_error() {
        assert!(write_line(&mut ClosedPipe, "hello").is_ok());
        assert!(write_text(&mut ClosedPipe, "hello").is_ok());
    }

    #[test]
    fn other_failures_propagate() {
        assert!(write_line(&mut Full, "hello").is_err());
    }

    #[test]
    fn line_appends_newline() {
        let mut buffer = Vec::new();
        assert!(write_line(&mut buffer, "hi").is_ok());
        assert_eq!(buffer, b"hi\n");
    }
}
