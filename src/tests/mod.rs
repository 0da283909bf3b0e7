mod common;
mod configs;
mod environment;
