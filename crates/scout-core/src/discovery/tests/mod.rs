mod tests_exclude;
mod tests_extensions;
