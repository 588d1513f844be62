//! Process-spawn boundary for launching configured executables.

use std::{
    io,
    path::Path,
    process::{Command, Stdio},
};

/// Seam between the orchestrator and the operating system.
///
/// Implementations must return as soon as the OS has accepted the spawn
/// request; the child is never awaited.
pub trait Spawner {
    fn spawn_detached(&self, executable: &Path) -> io::Result<()>;
}

/// Spawns the executable directly (no shell intermediary) with all standard
/// streams detached, so the child neither pollutes the terminal nor blocks on
/// unread output.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedSpawner;

impl Spawner for DetachedSpawner {
    fn spawn_detached(&self, executable: &Path) -> io::Result<()> {
        let mut command = Command::new(executable);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            // New process group: the child outlives this process and ignores
            // terminal signals aimed at it.
            command.process_group(0);
        }

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            const CREATE_NO_WINDOW: u32 = 0x0800_0000;
            const DETACHED_PROCESS: u32 = 0x0000_0008;
            command.creation_flags(CREATE_NO_WINDOW | DETACHED_PROCESS);
        }

        command.spawn().map(|_child| ())
    }
}
