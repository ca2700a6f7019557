mod helpers;
mod signup;
