pub mod statusbar;
