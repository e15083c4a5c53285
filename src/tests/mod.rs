mod slim;
mod sort;
