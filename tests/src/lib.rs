mod demos;
