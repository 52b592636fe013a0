// Workspace-level package; exists to host the rusty-hook configuration.
