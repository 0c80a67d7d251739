mod read;
mod search;
mod support;
