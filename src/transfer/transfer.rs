use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use log::{debug, warn};
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufWriter};
use tokio::net::TcpStream;
use crate::transfer::enums::transfer_error::TransferError;
use crate::transfer::traits::progress_sink::ProgressSink;

pub const STATUS_OK: u8 = 0x00;
pub const STATUS_ERROR: u8 = 0x01;

/// File names must be a single path component and one protocol token.
pub fn check_file_name(file_name: &str) -> Result<(), TransferError>
{
    let unsafe_name = file_name.is_empty()
        || file_name == "."
        || file_name == ".."
        || file_name.contains(['/', '\\', '\0'])
        || file_name.contains(char::is_whitespace);
    if unsafe_name {
        return Err(TransferError::UnsafeName(file_name.to_string()));
    }
    Ok(())
}

async fn write_string<W>(writer: &mut W, value: &str) -> Result<(), TransferError>
where
    W: AsyncWrite + Unpin,
{
    let length = u16::try_from(value.len()).map_err(|_| TransferError::NameTooLong(value.len()))?;
    writer.write_u16(length).await?;
    writer.write_all(value.as_bytes()).await?;
    Ok(())
}

async fn read_string<R>(reader: &mut R) -> Result<String, TransferError>
where
    R: AsyncRead + Unpin,
{
    let length = reader.read_u16().await? as usize;
    let mut buffer = vec![0u8; length];
    reader.read_exact(&mut buffer).await?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

pub async fn write_file_name<W>(writer: &mut W, file_name: &str) -> Result<(), TransferError>
where
    W: AsyncWrite + Unpin,
{
    write_string(writer, file_name).await?;
    writer.flush().await?;
    Ok(())
}

pub async fn read_file_name<R>(reader: &mut R) -> Result<String, TransferError>
where
    R: AsyncRead + Unpin,
{
    read_string(reader).await
}

pub async fn send_error<W>(writer: &mut W, message: &str) -> Result<(), TransferError>
where
    W: AsyncWrite + Unpin,
{
    writer.write_u8(STATUS_ERROR).await?;
    write_string(writer, message).await?;
    writer.flush().await?;
    Ok(())
}

/// Streams `path` after the success header. Returns the number of bytes sent.
/// A write that makes no progress for `stall_timeout` aborts the upload.
pub async fn send_file<W, P>(writer: &mut W, path: &Path, buffer_size: usize, stall_timeout: Duration, progress: &P) -> Result<u64, TransferError>
where
    W: AsyncWrite + Unpin,
    P: ProgressSink + ?Sized,
{
    let mut file = File::open(path).await?;
    let length = file.metadata().await?.len();
    progress.set_total(length);

    writer.write_u8(STATUS_OK).await?;
    writer.write_u64(length).await?;

    let mut buffer = vec![0u8; buffer_size.max(1)];
    let mut sent = 0u64;
    while sent < length {
        let wanted = buffer.len().min((length - sent) as usize);
        let read = file.read(&mut buffer[..wanted]).await?;
        if read == 0 {
            // File shrank while being served.
            return Err(TransferError::ShortTransfer { expected: length, received: sent });
        }
        tokio::time::timeout(stall_timeout, async {
            writer.write_all(&buffer[..read]).await?;
            writer.flush().await
        }).await.map_err(|_| TransferError::Stalled(stall_timeout))??;
        sent += read as u64;
        progress.advance(read as u64);
    }
    Ok(sent)
}

/// Sibling of `destination` that receives bytes until the transfer completes.
pub fn partial_path(destination: &Path) -> PathBuf
{
    let mut name = destination.as_os_str().to_owned();
    name.push(".part");
    PathBuf::from(name)
}

/// Reads one transfer reply and stores the payload at `destination`.
///
/// Bytes land in [`partial_path`] first and replace `destination` only once
/// the full length arrived, so a failed transfer never touches an existing file.
pub async fn receive_file<R, P>(reader: &mut R, destination: &Path, buffer_size: usize, progress: &P) -> Result<u64, TransferError>
where
    R: AsyncRead + Unpin,
    P: ProgressSink + ?Sized,
{
    match reader.read_u8().await? {
        STATUS_OK => {}
        STATUS_ERROR => return Err(TransferError::Rejected(read_string(reader).await?)),
        status => return Err(TransferError::InvalidStatus(status)),
    }
    let length = reader.read_u64().await?;
    progress.set_total(length);

    let partial = partial_path(destination);
    let result = match copy_exact(reader, &partial, length, buffer_size, progress).await {
        Ok(received) => tokio::fs::rename(&partial, destination).await
            .map(|_| received)
            .map_err(TransferError::from),
        Err(error) => Err(error),
    };
    if result.is_err() {
        if let Err(error) = tokio::fs::remove_file(&partial).await {
            warn!("[DOWNLOAD] Could not remove partial file {}: {error}", partial.display());
        }
    }
    result
}

async fn copy_exact<R, P>(reader: &mut R, destination: &Path, length: u64, buffer_size: usize, progress: &P) -> Result<u64, TransferError>
where
    R: AsyncRead + Unpin,
    P: ProgressSink + ?Sized,
{
    let mut file = BufWriter::new(File::create(destination).await?);
    let mut buffer = vec![0u8; buffer_size.max(1)];
    let mut received = 0u64;
    while received < length {
        let wanted = buffer.len().min((length - received) as usize);
        let read = reader.read(&mut buffer[..wanted]).await?;
        if read == 0 {
            return Err(TransferError::ShortTransfer { expected: length, received });
        }
        file.write_all(&buffer[..read]).await?;
        received += read as u64;
        progress.advance(read as u64);
    }
    file.flush().await?;
    file.get_ref().sync_all().await?;
    Ok(received)
}

/// Connects to `holder`, asks for `file_name` and stores it at `destination`.
pub async fn request_file<P>(holder: SocketAddr, file_name: &str, destination: &Path, buffer_size: usize, connect_timeout: Duration, progress: &P) -> Result<u64, TransferError>
where
    P: ProgressSink + ?Sized,
{
    let mut stream = tokio::time::timeout(connect_timeout, TcpStream::connect(holder)).await
        .map_err(|_| TransferError::Timeout(holder))??;
    debug!("[DOWNLOAD] Connected to {holder}, requesting {file_name}");
    write_file_name(&mut stream, file_name).await?;
    receive_file(&mut stream, destination, buffer_size, progress).await
}
