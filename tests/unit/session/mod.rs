mod test_headers;
mod test_state;
