use crate::errors::{self, Result};
use log::{info, trace};
use std::{fs, io, thread};

type Job<'a> = (usize, &'a str);
type Loaded = (usize, io::Result<String>);

/// Read all `files` in parallel.
///
/// Contents are returned in the same order as `files`. If any file cannot be
/// read, the whole load fails; nothing is returned until every read is done.
pub fn load_all(files: &[String]) -> Result<Vec<String>> {
    if files.is_empty() {
        return Ok(vec![]);
    }
    let (s1, r1) = crossbeam_channel::unbounded::<Job>();
    for (i, file) in files.iter().enumerate() {
        s1.send((i, file.as_str())).unwrap();
    }
    drop(s1);
    let nthreads = num_cpus::get().min(files.len());
    trace!(target: "doty", "reading {} files, {nthreads} threads", files.len());
    let mut contents: Vec<Option<io::Result<String>>> = (0..files.len()).map(|_| None).collect();
    thread::scope(|scope| {
        let (s2, r2) = crossbeam_channel::unbounded::<Loaded>();
        for _ in 0..nthreads {
            let r1 = r1.clone();
            let s2 = s2.clone();
            scope.spawn(move || {
                while let Ok((i, file)) = r1.recv() {
                    s2.send((i, fs::read_to_string(file))).unwrap();
                }
            });
        }
        drop(s2);
        while let Ok((i, loaded)) = r2.recv() {
            contents[i] = Some(loaded);
        }
    });
    let mut result = Vec::with_capacity(files.len());
    for (file, loaded) in files.iter().zip(contents) {
        match loaded {
            Some(Ok(data)) => {
                info!(target: "doty", "read: {file}");
                result.push(data);
            }
            Some(Err(e)) => return Err(errors::read_failed(file, e)),
            None => unreachable!(),
        }
    }
    Ok(result)
}
