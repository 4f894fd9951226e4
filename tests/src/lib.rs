#[cfg(test)]
mod lookup;
#[cfg(test)]
mod util;
