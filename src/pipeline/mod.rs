pub(crate) mod channels;
