mod properties_test;
mod signals_test;
