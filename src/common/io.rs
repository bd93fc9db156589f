use std::fs::File;
use std::io::{self, Read};
use std::ops::Deref;
use std::path::Path;

use memmap2::{Mmap, MmapOptions};

/// Whole-input buffer: either a read-only mmap or an owned Vec.
/// Dereferences to `&[u8]` so the codec sees one contiguous slice.
pub enum FileData {
    Mmap(Mmap),
    Owned(Vec<u8>),
}

impl Deref for FileData {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            FileData::Mmap(m) => m,
            FileData::Owned(v) => v,
        }
    }
}

/// Files under 1MB are read; mmap setup costs more than the copy it saves.
const MMAP_THRESHOLD: u64 = 1024 * 1024;

/// Read a whole file, memory-mapping regular files of at least 1MB.
pub fn read_file(path: &Path) -> io::Result<FileData> {
    let file = File::open(path)?;
    let metadata = file.metadata()?;
    let len = metadata.len();

    if !metadata.file_type().is_file() {
        // Pipes, character devices: size unknown up front.
        let mut buf = Vec::new();
        let mut reader = file;
        reader.read_to_end(&mut buf)?;
        return Ok(FileData::Owned(buf));
    }

    if len == 0 {
        return Ok(FileData::Owned(Vec::new()));
    }

    if len < MMAP_THRESHOLD {
        let mut buf = vec![0u8; len as usize];
        let n = read_full(&mut &file, &mut buf)?;
        buf.truncate(n);
        return Ok(FileData::Owned(buf));
    }

    // SAFETY: read-only mapping; the file is not modified through it.
    match unsafe { MmapOptions::new().map(&file) } {
        Ok(mmap) => {
            #[cfg(unix)]
            {
                let _ = mmap.advise(memmap2::Advice::Sequential);
            }
            Ok(FileData::Mmap(mmap))
        }
        Err(_) => {
            // mmap failed — fall back to read
            let mut buf = Vec::with_capacity(len as usize);
            let mut reader = file;
            reader.read_to_end(&mut buf)?;
            Ok(FileData::Owned(buf))
        }
    }
}

/// Read all of standard input into memory.
pub fn read_stdin() -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    io::stdin().lock().read_to_end(&mut buf)?;
    Ok(buf)
}

/// Read as many bytes as possible into buf, retrying on partial reads.
fn read_full(reader: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut total = 0;
    while total < buf.len() {
        match reader.read(&mut buf[total..]) {
            Ok(0) => break,
            Ok(n) => total += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(total)
}
