mod center;
mod common;
mod dialogs;
mod icons;
mod preview;
mod status;
mod toasts;
mod top;
