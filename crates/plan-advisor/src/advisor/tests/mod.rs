mod common;
mod estimation;
mod routing;
