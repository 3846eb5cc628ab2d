use crate::error::RenderError;
use std::path::Path;
use std::process::Command;

/// Opens an image with the platform's default viewer and waits for the command to return
pub fn open_image(path: &Path) -> Result<(), RenderError> {
    let mut command = viewer_command(path);
    ::log::debug!("Opening image viewer: {:?}", command);

    let status = command
        .status()
        .map_err(|e| RenderError::Viewer(e.to_string()))?;
    if !status.success() {
        return Err(RenderError::Viewer(format!(
            "viewer for {} exited with {}",
            path.display(),
            status
        )));
    }
    Ok(())
}

fn viewer_command(path: &Path) -> Command {
    if cfg!(target_os = "macos") {
        let mut command = Command::new("open");
        command.arg(path);
        command
    } else if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", "", "/WAIT"]).arg(path);
        command
    } else {
        let mut command = Command::new("xdg-open");
        command.arg(path);
        command
    }
}
